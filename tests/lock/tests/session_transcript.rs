//! Full interactive session transcripts.

use pancake_harness::config::HarnessConfig;
use pancake_harness::session::{Session, SessionEnd, INVALID_INPUT};

const MENU: &str = "Available Algorithms: \n\t d - DFS \n\t u - UCS \n\t g - Greedy \n\t a - A* \n\n";
const PROMPT: &str =
    "Please enter the order of pancakes (1-4) followed by the desired algorithm code e.g. 1234a: ";
const WELCOME: &str =
    "Welcome to Pancake Sort! Please follow the prompts below. To quit enter q at any point.\n";

fn run(input: &str) -> (String, SessionEnd) {
    let mut session = Session::new(input.as_bytes(), Vec::new(), HarnessConfig::default());
    let summary = session.run().unwrap();
    (String::from_utf8(session.into_output()).unwrap(), summary.end)
}

#[test]
fn astar_then_quit_exact_transcript() {
    let (out, end) = run("2143a\nq\n");
    let expected = format!(
        "{WELCOME}{MENU}{PROMPT}\
         Starting Stack: 2 1 4 3\n\
         A* Search Solution: \n\
         21|43 g=0, h=4\n\
         |2134 g=2, h=4\n\
         43|12 g=6, h=2\n\
         Final State: 4321 g=8, h=0\n\
         \n\
         Continue? Press The Enter Key..."
    );
    assert_eq!(out, expected);
    assert_eq!(end, SessionEnd::Quit);
}

#[test]
fn bad_lines_reprompt_until_valid() {
    let (out, end) = run("hello\n2143\n1123a\n4312u\nQ\n");
    assert_eq!(out.matches(INVALID_INPUT).count(), 3);
    assert_eq!(out.matches(PROMPT).count(), 4);
    assert!(out.contains("Uniform Cost Search Solution: \n43|12 g=0, h=2\nFinal State: 4321 g=2, h=0\n"));
    assert_eq!(end, SessionEnd::Quit);
}

#[test]
fn every_algorithm_heading_appears() {
    let (out, end) = run("3142d\n\n3142u\n\n3142g\n\n3142a\n");
    for heading in [
        "Depth First Search Solution: ",
        "Uniform Cost Search Solution: ",
        "Greedy Search Solution: ",
        "A* Search Solution: ",
    ] {
        assert!(out.contains(heading), "missing {heading:?}");
    }
    assert_eq!(out.matches(MENU).count(), 4);
    assert_eq!(end, SessionEnd::EndOfInput);
}
