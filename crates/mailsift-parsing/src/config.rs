/// Configuration for the email extraction pipeline.
///
/// The email pattern is fixed to [`EMAIL_PATTERN`](crate::EMAIL_PATTERN);
/// only the text preparation before matching is configurable.
/// Use [`EmailParsingConfigBuilder`] to construct a non-default config.
#[derive(Debug, Clone)]
pub struct EmailParsingConfig {
    /// Expand typographic ligatures in page text before matching (default: true).
    pub(crate) expand_ligatures: bool,
}

impl Default for EmailParsingConfig {
    fn default() -> Self {
        Self {
            expand_ligatures: true,
        }
    }
}

impl EmailParsingConfig {
    pub fn expand_ligatures(&self) -> bool {
        self.expand_ligatures
    }
}

/// Builder for [`EmailParsingConfig`]. Unset options keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct EmailParsingConfigBuilder {
    expand_ligatures: Option<bool>,
}

impl EmailParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand_ligatures(mut self, enabled: bool) -> Self {
        self.expand_ligatures = Some(enabled);
        self
    }

    pub fn build(self) -> EmailParsingConfig {
        EmailParsingConfig {
            expand_ligatures: self.expand_ligatures.unwrap_or(true),
        }
    }
}
