#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use resume_enhancer::{Error, LLMProvider, Result};

/// Provider double that replays canned replies and records prompts.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::LLMApi("no scripted reply".to_string())))
    }

    fn name(&self) -> &str {
        "Scripted"
    }

    fn model(&self) -> &str {
        "scripted-1"
    }
}

pub const ANALYSIS_REPLY: &str = r#"Thanks for the documents.

<analysis>
Strong Rust and PostgreSQL background. No Kafka or Kubernetes.
</analysis>

<tailoring_suggestions>
1. Add event streaming work
2. Quantify ownership of the routing service
</tailoring_suggestions>

<score_justification>
Core language fit is good, platform requirements are missing.
</score_justification>

<score>
64/100
</score>
"#;

pub const OPTIMIZATION_REPLY: &str = r#"<optimized_resume>
Jane Doe
Backend Engineer, Parcelhub (2020 - present)
- Owned the Rust order routing service end to end (40M shipments)
- Streamed shipment events through Kafka
</optimized_resume>

<changes_made>
- Highlighted ownership
- Surfaced event streaming
</changes_made>

<new_score>
79
</new_score>

<score_justification>
Event streaming is now visible.
</score_justification>"#;
