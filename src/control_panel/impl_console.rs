use crate::control_panel::action::{perform, PanelAction};
use crate::control_panel::interface::ControlPanel;
use crate::smart_home::controller::SmartHomeController;
use std::error::Error;
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq)]
enum ConsoleInput<'a> {
    Action(PanelAction),
    Send(&'a str),
    Help,
    Quit,
    Empty,
    Unknown,
}

impl<'a> ConsoleInput<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ConsoleInput::Empty;
        }

        if let Some((head, rest)) = line.split_once(' ') {
            if head.eq_ignore_ascii_case("send") {
                return ConsoleInput::Send(rest.trim());
            }
        }

        let action = match line.to_ascii_lowercase().as_str() {
            "1" | "on" => PanelAction::TurnOn,
            "2" | "off" => PanelAction::TurnOff,
            "3" | "lock" => PanelAction::LockDoor,
            "4" | "unlock" => PanelAction::UnlockDoor,
            "5" | "status" => PanelAction::CheckStatus,
            "help" | "?" => return ConsoleInput::Help,
            "quit" | "exit" | "q" => return ConsoleInput::Quit,
            _ => return ConsoleInput::Unknown,
        };
        ConsoleInput::Action(action)
    }
}

/// Line-based stand-in for the window: the five buttons become numbered
/// entries and the readout is printed after every action.
pub struct ControlPanelConsole<R, W> {
    input: R,
    output: W,
}

impl ControlPanelConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ControlPanelConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_menu(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        for (i, action) in PanelAction::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, action.label())?;
        }
        writeln!(self.output, "  send <command>  broadcast a raw command")?;
        writeln!(self.output, "  quit")?;
        Ok(())
    }

    fn write_readout(&mut self, readout: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        writeln!(self.output, "----------------")?;
        write!(self.output, "{}", readout)?;
        writeln!(self.output, "----------------")?;
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> ControlPanel for ControlPanelConsole<R, W> {
    fn run(
        &mut self,
        mut controller: SmartHomeController,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.write_menu()?;
        self.write_readout(&controller.status_report())?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            match ConsoleInput::parse(&line) {
                ConsoleInput::Action(action) => {
                    let readout = perform(&mut controller, action);
                    self.write_readout(&readout)?;
                }
                ConsoleInput::Send(command) => {
                    controller.broadcast(command);
                    self.write_readout(&controller.status_report())?;
                }
                ConsoleInput::Help => self.write_menu()?,
                ConsoleInput::Quit => return Ok(()),
                ConsoleInput::Empty => {}
                ConsoleInput::Unknown => {
                    writeln!(self.output, "Unknown input, type 'help' for options")?;
                }
            }
        }
    }
}
