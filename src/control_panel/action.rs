use crate::smart_home::controller::SmartHomeController;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    TurnOn,
    TurnOff,
    LockDoor,
    UnlockDoor,
    CheckStatus,
}

impl PanelAction {
    /// Button order.
    pub const ALL: [PanelAction; 5] = [
        PanelAction::TurnOn,
        PanelAction::TurnOff,
        PanelAction::LockDoor,
        PanelAction::UnlockDoor,
        PanelAction::CheckStatus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PanelAction::TurnOn => "Turn ON Devices",
            PanelAction::TurnOff => "Turn OFF Devices",
            PanelAction::LockDoor => "Lock Door",
            PanelAction::UnlockDoor => "Unlock Door",
            PanelAction::CheckStatus => "Check Status",
        }
    }

    pub fn command(&self) -> Option<&'static str> {
        match self {
            PanelAction::TurnOn => Some("ON"),
            PanelAction::TurnOff => Some("OFF"),
            PanelAction::LockDoor => Some("LOCK"),
            PanelAction::UnlockDoor => Some("UNLOCK"),
            PanelAction::CheckStatus => None,
        }
    }
}

/// Runs one button press and returns the text the readout should show.
pub fn perform(controller: &mut SmartHomeController, action: PanelAction) -> String {
    if let Some(command) = action.command() {
        controller.broadcast(command);
    }
    controller.status_report()
}
