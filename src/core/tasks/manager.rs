use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tracing::debug;

use super::TaskResult;
use crate::{
    core::GenerationRequest,
    generator::FlashcardGenerator,
};

/// Runs blocking work off the UI thread and hands results back through a
/// channel that the window drains once per frame.
pub struct TaskManager {
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    in_flight: usize,
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();

        Self { receiver, sender, in_flight: 0 }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            debug!(task = result.task_type(), "Task finished");
            self.in_flight = self.in_flight.saturating_sub(1);
            results.push(result);
        }

        results
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn generate_flashcard(
        &mut self,
        generator: Arc<FlashcardGenerator>,
        request: GenerationRequest,
    ) {
        let sender = self.sender.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            let result = generator.generate(
                &request.expression,
                request.input_language,
                request.output_language,
            );

            let _ = sender.send(TaskResult::FlashcardGenerated {
                expression: request.expression,
                result,
            });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use super::*;
    use crate::{
        core::{
            FlashcardError,
            Language,
        },
        generator::{
            CompletionRequest,
            LanguageModel,
        },
    };

    struct OfflineModel;

    impl LanguageModel for OfflineModel {
        fn complete(&self, _request: &CompletionRequest) -> Result<String, FlashcardError> {
            Err(FlashcardError::Backend("offline".to_string()))
        }

        fn model_name(&self) -> &str {
            "offline"
        }
    }

    #[test]
    fn generation_result_arrives_through_poll() {
        let mut manager = TaskManager::new();
        let generator = Arc::new(FlashcardGenerator::new(Box::new(OfflineModel)));

        manager.generate_flashcard(
            generator,
            GenerationRequest {
                expression: "cruel".to_string(),
                input_language: Language::English,
                output_language: Language::Polish,
            },
        );
        assert!(manager.is_busy());

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut results = Vec::new();
        while results.is_empty() && Instant::now() < deadline {
            results = manager.poll_results();
            thread::sleep(Duration::from_millis(10));
        }

        assert!(!manager.is_busy());
        match results.as_slice() {
            [TaskResult::FlashcardGenerated { expression, result: Err(FlashcardError::Backend(_)) }] => {
                assert_eq!(expression, "cruel");
            }
            other => panic!("unexpected results {other:?}"),
        }
    }
}
