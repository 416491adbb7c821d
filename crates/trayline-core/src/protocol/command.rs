use crate::{CoreError, CoreResult, MenuNode, Message};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

/// A validated inbound command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the whole tray menu.
    SetMenu(Vec<MenuNode>),
    /// Replace the tray icon with a base64-encoded image.
    SetIcon(String),
    /// Replace the tooltip text. Empty clears it.
    SetTooltip(String),
    /// Withdraw the tray and exit.
    Quit,
}

#[derive(Deserialize)]
struct SetIconParams {
    base64: String,
}

#[derive(Deserialize)]
struct SetTooltipParams {
    text: String,
}

impl Command {
    /// Interpret a framed message as a command.
    ///
    /// `setMenu` never fails: absent or non-array `items` is an empty menu and
    /// node fields are read leniently (see [`MenuNode::from_value`]). The
    /// other payload-carrying methods require their field to be present and
    /// of the right type.
    #[track_caller]
    pub fn from_message(message: Message) -> CoreResult<Self> {
        let Message { method, params } = message;

        match method.as_str() {
            "setMenu" => {
                let items = params.as_ref().and_then(|params| params.get("items"));
                Ok(Command::SetMenu(MenuNode::list_from_value(items)))
            }
            "setIcon" => {
                let params: SetIconParams = parse_params(&method, params)?;
                Ok(Command::SetIcon(params.base64))
            }
            "setTooltip" => {
                let params: SetTooltipParams = parse_params(&method, params)?;
                Ok(Command::SetTooltip(params.text))
            }
            "quit" => Ok(Command::Quit),
            _ => Err(CoreError::UnknownMethod {
                method,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Protocol method name of this command.
    pub fn method(&self) -> &'static str {
        match self {
            Command::SetMenu(_) => "setMenu",
            Command::SetIcon(_) => "setIcon",
            Command::SetTooltip(_) => "setTooltip",
            Command::Quit => "quit",
        }
    }
}

#[track_caller]
fn parse_params<T: DeserializeOwned>(method: &str, params: Option<Value>) -> CoreResult<T> {
    let value = params.ok_or_else(|| CoreError::InvalidParams {
        method: method.to_string(),
        reason: "missing params".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    serde_json::from_value(value).map_err(|e| CoreError::InvalidParams {
        method: method.to_string(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
