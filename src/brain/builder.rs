// RequestBuilder - type-safe chainable builder for GenerateContentRequest
#![allow(dead_code)]

use super::{Content, GenerateContentRequest, GenerationConfig, Role};

pub struct RequestBuilder {
    system: Option<String>,
    contents: Vec<Content>,
    generation: GenerationConfig,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            system: None,
            contents: Vec::new(),
            generation: GenerationConfig::default(),
        }
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn user_text(mut self, text: impl Into<String>) -> Self {
        self.contents.push(Content::user_text(text));
        self
    }

    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.generation.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.generation.top_p = Some(top_p);
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.generation.top_k = Some(top_k);
        self
    }

    pub fn stop_sequences(mut self, sequences: Vec<String>) -> Self {
        self.generation.stop_sequences = Some(sequences);
        self
    }

    pub fn build(self) -> Result<GenerateContentRequest, &'static str> {
        if self.contents.is_empty() {
            return Err("contents cannot be empty");
        }

        // Validate: first content must be user role
        if self.contents.first().and_then(|c| c.role.as_ref()) != Some(&Role::User) {
            return Err("first content must have user role");
        }

        let generation_config = if self.generation.is_empty() {
            None
        } else {
            Some(self.generation)
        };

        Ok(GenerateContentRequest {
            contents: self.contents,
            system_instruction: self.system.map(Content::instruction),
            generation_config,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
