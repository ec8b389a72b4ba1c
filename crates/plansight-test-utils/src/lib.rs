//! Shared fixtures for plansight integration tests.
//!
//! Each constant is planner output in the shape a real planner prints it,
//! noise lines included. [`write_plan`] puts one on disk for tests that go
//! through the file system.

use std::io::Write;

use plansight_core::{ParseOptions, PlanParseResult, parse_plan};
use tempfile::NamedTempFile;

/// FF-style classical robot plan with search statistics.
pub const ROBOT_FF: &str = "\
ff: parsing domain file
domain 'ROBOT' defined
 ... done.
ff: parsing problem file
problem 'DELIVER-BALLS' defined
 ... done.

Grounding...
found plan:
step    0: MOVE WALLY ROOMA ROOMB
        1: PICK BALL1 ROOMB WALLY
        2: MOVE WALLY ROOMB ROOMA
        3: DROP BALL1 ROOMA WALLY

Planning Time (msec): 12
Search Time (msec): 4
Expanded Nodes: 9
States Evaluated: 15
Plan-Length: 4
";

/// Timed robot plan with two robots whose actions overlap.
pub const ROBOT_TEMPORAL: &str = "\
; Domain parsed
; Problem parsed
0.000: (move wally rooma roomb) [3.000]
0.000: (move eve roomc rooma) [3.000]
3.001: (pick ball1 roomb wally) [1.500]
3.001: (pick box2 rooma eve) [1.500]
4.502: (drop ball1 roomb wally) [1.500]
; Plan-Length: 5
; Metric (search): 10.503
";

/// Miconic-style elevator plan.
pub const ELEVATOR: &str = "\
0: (board person1 elevator1 f1)
1: (move-up elevator1) [D:3.0]
4: (leave person1 elevator1 f3)
5: (reached person1)
6: (move-down elevator1)
";

/// Logistics plan with trucks and planes, LPG-style.
pub const LOGISTICS: &str = "\
; Version LPG-td-1.4
; Seed 12345
; Command line: lpg-td -o domain.pddl -f p01.pddl
; Time 0.02
; Search time 0.01
; Parsing time 0.00
; Mutex time 0.00
; MetricValue 6.00

0:   (LOAD package1 truck1 city1-warehouse) [1]
1:   (DRIVE truck1 city1-warehouse city1-airport) [1]
2:   (UNLOAD package1 truck1 city1-airport) [1]
3:   (LOAD package1 plane1 city1-airport) [1]
4:   (FLY plane1 city1-airport city2-airport) [1]
5:   (UNLOAD package1 plane1 city2-airport) [1]
";

/// Untimed plan as printed by planners that list bare actions.
pub const BARE: &str = "\
(pick-up ball1 rooma wally)
(move wally rooma roomb)
(put-down ball1 roomb wally)
";

/// A domain definition mistakenly passed as a plan.
pub const DOMAIN_FILE: &str = "\
(define (domain logistics)
  (:requirements :strips :typing)
  (:types truck location package)
  (:action drive
    :parameters (?t - truck ?from ?to - location)
    :precondition (at ?t ?from)
    :effect (and (at ?t ?to) (not (at ?t ?from)))))
";

/// A problem definition mistakenly passed as a plan.
pub const PROBLEM_FILE: &str = "\
(define (problem deliver-1)
  (:domain robot)
  (:objects wally - robot rooma roomb - room)
  (:init (at wally rooma))
  (:goal (at wally roomb)))
";

/// Parse a fixture with default options.
pub fn parse_default(content: &str) -> PlanParseResult {
    parse_plan(content, &ParseOptions::default())
}

/// Write `content` to a temporary file that lives as long as the handle.
pub fn write_plan(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp plan file");
    file.write_all(content.as_bytes())
        .expect("failed to write temp plan file");
    file
}
