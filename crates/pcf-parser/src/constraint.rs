//! PCF constraint types

use serde::{Deserialize, Serialize};

/// Placement constraint binding a net to a physical pad
///
/// Produced for `set_io <net> <pad>` lines. The original line text and its
/// 1-based number are kept so diagnostics can point back at the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcfIoConstraint {
    /// Logical signal name in the design
    pub net: String,
    /// Physical pad/ball identifier
    pub pad: String,
    /// Original line, trimmed of surrounding whitespace. An inline trailing
    /// comment is retained.
    pub line_str: String,
    /// 1-based line number in the source, counting blank and comment lines
    pub line_num: usize,
}

/// Global clock constraint
///
/// Produced for `set_clk <pin> <net>` lines: every tile where `net` appears
/// is constrained to use global clock pin `pin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcfClkConstraint {
    /// Global clock pin
    pub pin: String,
    /// Net routed through that pin
    pub net: String,
}

/// A single parsed PCF constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PcfConstraint {
    Io(PcfIoConstraint),
    Clk(PcfClkConstraint),
}

/// Accumulated constraints, bucketed by kind
#[derive(Debug, Default)]
pub struct PcfData {
    pub io_constraints: Vec<PcfIoConstraint>,
    pub clk_constraints: Vec<PcfClkConstraint>,
}

impl PcfData {
    pub fn add(&mut self, constraint: PcfConstraint) {
        match constraint {
            PcfConstraint::Io(io) => self.io_constraints.push(io),
            PcfConstraint::Clk(clk) => self.clk_constraints.push(clk),
        }
    }
}

const PCF_COMMANDS: &[&str] = &["set_io", "set_clk"];

/// Whether `name` is a PCF command this parser interprets
pub fn is_pcf_command(name: &str) -> bool {
    PCF_COMMANDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pcf_command() {
        assert!(is_pcf_command("set_io"));
        assert!(is_pcf_command("set_clk"));
        assert!(!is_pcf_command("set_frequency"));
        assert!(!is_pcf_command("create_clock"));
        assert!(!is_pcf_command(""));
    }

    #[test]
    fn test_pcf_data_accumulation() {
        let mut data = PcfData::default();
        assert!(data.io_constraints.is_empty());
        assert!(data.clk_constraints.is_empty());

        data.add(PcfConstraint::Io(PcfIoConstraint {
            net: "led_0".to_string(),
            pad: "A3".to_string(),
            line_str: "set_io led_0 A3".to_string(),
            line_num: 1,
        }));
        data.add(PcfConstraint::Clk(PcfClkConstraint {
            pin: "clk_in".to_string(),
            net: "sys_clk".to_string(),
        }));

        assert_eq!(data.io_constraints.len(), 1);
        assert_eq!(data.clk_constraints.len(), 1);
        assert_eq!(data.io_constraints[0].net, "led_0");
        assert_eq!(data.clk_constraints[0].pin, "clk_in");
    }
}
