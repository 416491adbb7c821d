use crate::{Emitter, Event, tests::support::{BrokenPipe, SharedBuffer}};

use std::thread;

/// WHAT: Events serialize to the wire shape, one line each
/// WHY: The parent parses these lines verbatim
#[test]
fn given_events_when_emitted_then_wire_format_matches() {
    // Given: An emitter over a buffer
    let buffer = SharedBuffer::default();
    let emitter = Emitter::new(buffer.clone());

    // When: Emitting each event kind
    emitter.emit(&Event::Ready);
    emitter.emit(&Event::MenuRequested);
    emitter.emit(&Event::Clicked { id: "b".to_string() });

    // Then: Exact JSON lines, params omitted where empty
    assert_eq!(
        buffer.contents(),
        concat!(
            "{\"method\":\"ready\"}\n",
            "{\"method\":\"menuRequested\"}\n",
            "{\"method\":\"clicked\",\"params\":{\"id\":\"b\"}}\n",
        )
    );
}

/// WHAT: Concurrent emits never interleave within a line
/// WHY: UI callbacks and other threads share one output stream
#[test]
#[allow(clippy::unwrap_used)]
fn given_concurrent_emitters_when_emitting_then_every_line_parses() {
    // Given: Several threads sharing clones of one emitter
    let buffer = SharedBuffer::default();
    let emitter = Emitter::new(buffer.clone());
    let threads = 8;
    let per_thread = 200;

    // When: All of them emit long events at once
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let emitter = emitter.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    let id = format!("{t}-{i}-{}", "x".repeat(256));
                    emitter.emit(&Event::Clicked { id });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Then: Every line is a complete, valid event
    let events = buffer.events();
    assert_eq!(events.len(), threads * per_thread);
    assert!(
        events
            .iter()
            .all(|e| matches!(e, Event::Clicked { id } if id.ends_with(&"x".repeat(256))))
    );
}

/// WHAT: Write failures are swallowed
/// WHY: A vanished parent must not crash the tray process
#[test]
fn given_broken_output_when_emitting_then_no_panic() {
    // Given: An emitter whose writer always fails
    let emitter = Emitter::new(BrokenPipe);

    // When/Then: Emitting returns normally
    emitter.emit(&Event::Ready);
    emitter.emit(&Event::Clicked { id: "a".to_string() });
}
