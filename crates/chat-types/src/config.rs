use serde::{Deserialize, Serialize};

/// Top-level client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    pub gateway: GatewayConfig,
    pub persona: Persona,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// URL of the chat endpoint; relative URLs resolve against the page origin
    pub endpoint: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

pub const DEFAULT_ENDPOINT: &str = "/chat";

/// Which set of display strings the client presents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    /// Health-advice assistant; failures point users at emergency services
    #[default]
    Doctor,
    /// Plain chat assistant
    General,
}

impl Persona {
    pub fn all() -> &'static [Persona] {
        &[Persona::Doctor, Persona::General]
    }

    pub fn label(&self) -> &str {
        match self {
            Persona::Doctor => "AI Doctor",
            Persona::General => "General Chat",
        }
    }

    pub fn strings(&self) -> DisplayStrings {
        match self {
            Persona::Doctor => DisplayStrings::doctor(),
            Persona::General => DisplayStrings::general(),
        }
    }
}

/// Every piece of copy text the client shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayStrings {
    pub title: String,
    pub user_label: String,
    pub assistant_label: String,
    pub welcome_title: String,
    pub welcome_text: String,
    pub features: Vec<String>,
    pub start_prompt: String,
    /// Message field hint once a credential is present
    pub placeholder_ready: String,
    /// Message field hint while the credential is empty
    pub placeholder_needs_key: String,
    pub loading_caption: String,
    /// Failure reply; `{error}` is replaced with the failure reason
    pub apology_template: String,
}

impl Default for DisplayStrings {
    fn default() -> Self {
        Self::doctor()
    }
}

impl DisplayStrings {
    pub fn doctor() -> Self {
        Self {
            title: "AI Doctor".to_string(),
            user_label: "You".to_string(),
            assistant_label: "AI Doctor".to_string(),
            welcome_title: "Welcome to Your AI Doctor!".to_string(),
            welcome_text: "I'm your personal AI doctor here to help with health questions, \
                symptom analysis, and medical guidance."
                .to_string(),
            features: vec![
                "Symptom Analysis".to_string(),
                "Medication Info".to_string(),
                "Wellness Tips".to_string(),
                "When to See a Doctor".to_string(),
            ],
            start_prompt: "Enter your API key above and start consulting with your AI doctor"
                .to_string(),
            placeholder_ready: "Ask your AI doctor about symptoms or health concerns...".to_string(),
            placeholder_needs_key: "Please enter your API key to consult with your AI doctor"
                .to_string(),
            loading_caption: "Your AI doctor is analyzing...".to_string(),
            apology_template: "I apologize, but I'm having trouble connecting to the AI doctor \
                service. Error: {error}. Please check your API key and try again. If this is a \
                medical emergency, please contact emergency services immediately."
                .to_string(),
        }
    }

    pub fn general() -> Self {
        Self {
            title: "AI Chat".to_string(),
            user_label: "You".to_string(),
            assistant_label: "Assistant".to_string(),
            welcome_title: "Welcome to AI Chat!".to_string(),
            welcome_text: "Ask me anything. I can explain, summarize, brainstorm and help you \
                write."
                .to_string(),
            features: vec![
                "Questions & Answers".to_string(),
                "Writing Help".to_string(),
                "Brainstorming".to_string(),
            ],
            start_prompt: "Enter your API key above to start chatting".to_string(),
            placeholder_ready: "Type your message...".to_string(),
            placeholder_needs_key: "Please enter your API key to start chatting".to_string(),
            loading_caption: "Thinking...".to_string(),
            apology_template: "I apologize, but I'm having trouble connecting to the chat \
                service. Error: {error}. Please check your API key and try again."
                .to_string(),
        }
    }

    /// Render the failure reply for `reason`.
    pub fn apology(&self, reason: &str) -> String {
        self.apology_template.replace("{error}", reason)
    }

    pub fn role_label(&self, role: crate::message::Role) -> &str {
        match role {
            crate::message::Role::User => &self.user_label,
            crate::message::Role::Assistant => &self.assistant_label,
        }
    }
}
