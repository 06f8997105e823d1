//! Scripted cell for unit tests

use std::collections::VecDeque;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::traits::{CellIo, LogLevel, RotationCommand, TranslationCommand};

/// Side effect observed on the mock, in call order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvent {
    Rotation(RotationCommand),
    Translation(TranslationCommand),
    Write(u8),
}

#[derive(Debug, Default)]
pub struct MockCell {
    pub light_barrier: bool,
    pub home: bool,
    pub quarter: bool,
    pub inbox: VecDeque<u8>,
    pub events: Vec<IoEvent>,
    pub logs: Vec<(LogLevel, String)>,
    pub now_ms: u64,
}

impl MockCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, byte: u8) {
        self.inbox.push_back(byte);
    }

    pub fn written(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                IoEvent::Write(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn rotations(&self) -> Vec<RotationCommand> {
        self.events
            .iter()
            .filter_map(|e| match e {
                IoEvent::Rotation(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    pub fn translations(&self) -> Vec<TranslationCommand> {
        self.events
            .iter()
            .filter_map(|e| match e {
                IoEvent::Translation(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl CellIo for MockCell {
    fn light_barrier(&mut self) -> bool {
        self.light_barrier
    }

    fn home_limit_switch(&mut self) -> bool {
        self.home
    }

    fn quarter_turn_limit_switch(&mut self) -> bool {
        self.quarter
    }

    fn drive_rotation(&mut self, command: RotationCommand) {
        self.events.push(IoEvent::Rotation(command));
    }

    fn drive_translation(&mut self, command: TranslationCommand) {
        self.events.push(IoEvent::Translation(command));
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.inbox.pop_front()
    }

    fn write_byte(&mut self, byte: u8) {
        self.events.push(IoEvent::Write(byte));
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        self.logs.push((level, message.to_string()));
    }

    fn clock_millis(&mut self) -> u64 {
        self.now_ms
    }
}
