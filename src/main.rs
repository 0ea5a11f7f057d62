use StringQueueMini::core::log::append_logs;
use std::sync::Arc;
use std::thread;
use StringQueueMini::core::buildcore::StringQueueSystem;

fn main() {
    let system = Arc::new(StringQueueSystem::new());

    // Each worker feeds its own batch of words into the shared queue
    let batches = [
        vec!["pear", "kiwi", "plum"],
        vec!["apple", "mango"],
        vec!["fig", "banana", "cherry"],
    ];

    let mut handles = vec![];
    for batch in batches {
        let system = Arc::clone(&system);
        handles.push(thread::spawn(move || {
            for word in batch {
                system.insert_tail(word).expect("insert failed");
            }
        }));
    }

    // Wait for all threads to complete
    for handle in handles {
        handle.join().unwrap();
    }

    system.sort();

    // Drain in sorted order
    while let Ok(item) = system.remove_head() {
        println!("{item}");
    }

    // Append the operation log as NDJSON
    append_logs(&system.logs(), "output.ndjson").expect("Failed to append logs");
}
