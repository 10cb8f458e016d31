//! Subprocess front-ends for the load tester and the vulnerability scanner.
mod load_tester;
mod process;
mod scanner;


pub use load_tester::{DEFAULT_LOAD_TESTER_BINARY, DEFAULT_LOAD_TESTER_MANIFEST, LoadTester};
pub use process::{ToolOutput, run_tool};
pub use scanner::{DEFAULT_SCANNER_PROGRAM, ScanAction, Scanner};
