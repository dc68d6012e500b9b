//! Simulated quiz session.
//!
//! Loads a trivia document, wires a rig for one user and drives it the
//! way a host scheduler would: dispatch a click for each round, then
//! tick the countdown until it expires.

use parking_lot::Mutex;
use quiz_core::{join_path, Document};
use quiz_hud::{QuizRig, SharedSink, TargetLookup, TextBuffer};
use quiz_timer::TimerConfig;
use std::collections::HashMap;
use std::sync::Arc;

const TRIVIA: &str = r#"{
    "trivia": {
        "geography": [
            "What is the capital of Australia?",
            "Which river runs through Cairo?",
            "Name the smallest country in the world."
        ],
        "music": [
            "Which band recorded Abbey Road?",
            "How many strings does a standard violin have?"
        ],
        "sports": [
            "How many players are on a volleyball team?"
        ]
    }
}"#;

struct DemoLookup {
    documents: HashMap<String, Arc<Document>>,
}

impl TargetLookup for DemoLookup {
    fn document_for(&self, user_id: &str) -> Option<Arc<Document>> {
        self.documents.get(user_id).cloned()
    }
}

fn main() {
    env_logger::init();

    let mut documents = HashMap::new();
    documents.insert("demo-user".to_string(), Arc::new(Document::from_json(TRIVIA)));
    let lookup = Arc::new(DemoLookup { documents });

    let question = Arc::new(Mutex::new(TextBuffer::new()));
    let label = Arc::new(Mutex::new(TextBuffer::new()));

    let mut rig = QuizRig::new(
        "demo-user",
        lookup,
        "trivia.geography;trivia.music;trivia.sports",
        TimerConfig::default()
            .with_duration_secs(5.0)
            .with_emit("roundover"),
    )
    .with_question_sink(question.clone() as SharedSink)
    .with_timer_label(label.clone() as SharedSink);

    let mut time = 0.0;
    for round in 1..=3 {
        if let Err(err) = rig.handle_event("click") {
            log::error!("Could not advance question: {}", err);
            break;
        }
        println!("-- round {} --", round);
        println!("question [{}]: {}", join_path(rig.current_question()), question.lock().text());

        // tick until the countdown expires, printing label changes
        let mut shown = String::new();
        loop {
            let events = rig.tick(time, 100.0);
            let current = label.lock().text().to_string();
            if current != shown {
                println!("  timer: {}", current);
                shown = current;
            }
            time += 100.0;
            if events.iter().any(|e| e.name == "roundover") {
                println!("  round over");
                break;
            }
        }
    }
}
