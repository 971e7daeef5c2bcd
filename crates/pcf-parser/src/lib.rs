//! PCF (Physical Constraints File) parser
//!
//! PCF files bind logical design signals to physical device resources, one
//! directive per line:
//!
//! * `set_io <net> <pad>` - constrain a given `<net>` to a given physical
//!   `<pad>` in the device pinout.
//! * `set_clk <pin> <net>` - constrain a given global clock `<pin>` to a
//!   given `<net>`. Every tile where `<net>` is present will be constrained
//!   to use that global clock.
//!
//! `#` starts a comment running to end of line; tokens beginning with `-`
//! are option flags the parser ignores wherever they appear.
//!
//! The scan is lazy: constraints come out one at a time as lines are
//! consumed, so large files never need full materialization. The first
//! malformed line surfaces as an error and ends the scan.
//!
//! # Example
//!
//! ```rust
//! use pcf_parser::{PcfConstraint, PcfParser};
//!
//! let parser = PcfParser::new();
//! for result in parser.parse_str("set_io led_0 A3\nset_clk clk_in sys_clk") {
//!     match result.unwrap() {
//!         PcfConstraint::Io(io) => println!("{} -> pad {}", io.net, io.pad),
//!         PcfConstraint::Clk(clk) => println!("{} -> clock pin {}", clk.net, clk.pin),
//!     }
//! }
//! ```

pub mod config;
pub mod constraint;
pub mod errors;
pub mod parser;

// Re-export commonly used types
pub use config::ParserConfig;
pub use constraint::{is_pcf_command, PcfClkConstraint, PcfConstraint, PcfData, PcfIoConstraint};
pub use errors::{PcfError, PcfResult};
pub use parser::{PcfLines, PcfParser};
