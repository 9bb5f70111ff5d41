use crate::config::SwitchConfig;
use crate::engine::Tally;
use crate::model::Mode;

pub mod config;
pub mod doctor;
pub mod inspect;
pub mod switch;
pub mod toggle;

pub use doctor::Finding;
pub use inspect::LayerReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Set by switching commands once a traversal has run.
    pub tally: Option<Tally>,
    pub target: Option<Mode>,
    pub layers: Vec<LayerReport>,
    pub findings: Vec<Finding>,
    pub config: Option<SwitchConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_tally(mut self, tally: Tally) -> Self {
        self.tally = Some(tally);
        self
    }

    pub fn with_target(mut self, target: Mode) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_layers(mut self, layers: Vec<LayerReport>) -> Self {
        self.layers = layers;
        self
    }

    pub fn with_findings(mut self, findings: Vec<Finding>) -> Self {
        self.findings = findings;
        self
    }

    pub fn with_config(mut self, config: SwitchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether the command mutated the document.
    pub fn changed(&self) -> bool {
        self.tally.is_some_and(|t| t.switched > 0)
    }
}
