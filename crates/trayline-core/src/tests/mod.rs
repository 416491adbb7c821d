mod command;
mod emitter;
mod support;
