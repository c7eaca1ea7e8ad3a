/// A broadcast string after keyword recognition. Keywords are matched
/// case-insensitively; anything else is `Unrecognized` and every device
/// treats it as a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    On,
    Off,
    Lock,
    Unlock,
    /// Raw argument text; empty when the keyword came without one.
    SetTemperature(&'a str),
    Unrecognized,
}

const SET_TEMPERATURE: &str = "SET_TEMP";

impl<'a> Command<'a> {
    pub fn parse(command: &'a str) -> Self {
        if command.eq_ignore_ascii_case("ON") {
            return Command::On;
        }
        if command.eq_ignore_ascii_case("OFF") {
            return Command::Off;
        }
        if command.eq_ignore_ascii_case("LOCK") {
            return Command::Lock;
        }
        if command.eq_ignore_ascii_case("UNLOCK") {
            return Command::Unlock;
        }

        let mut tokens = command.split(' ');
        match tokens.next() {
            Some(keyword) if keyword.eq_ignore_ascii_case(SET_TEMPERATURE) => {
                Command::SetTemperature(tokens.next().unwrap_or(""))
            }
            _ => Command::Unrecognized,
        }
    }
}
