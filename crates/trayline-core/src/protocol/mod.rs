mod command;
mod emitter;
mod event;
mod framer;
mod message;

pub use {
    command::Command, emitter::Emitter, event::Event, framer::LineFramer, message::Message,
};
