use crate::commands::{CmdMessage, CmdResult};
use crate::config::SwitchConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SwitchConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            for key in SwitchConfig::KEYS {
                if let Some(val) = config.get(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, val)));
                }
            }
            Ok(result.with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SwitchConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SwitchConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_then_show_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();

        let result = run(dir, ConfigAction::Set("separator".into(), " / ".into())).unwrap();
        assert_eq!(result.messages[0].content, "separator set to \" / \"");

        let result = run(dir, ConfigAction::ShowKey("separator".into())).unwrap();
        assert_eq!(result.messages[0].content, "\" / \"");
    }

    #[test]
    fn show_all_lists_every_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = run(temp_dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.config, Some(SwitchConfig::default()));
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();

        let result = run(dir, ConfigAction::Set("persist-on-noop".into(), "maybe".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.join("config.json").exists());
    }
}
