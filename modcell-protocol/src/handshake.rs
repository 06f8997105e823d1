//! Hand-over handshake signals
//!
//! The handshake is asymmetric. The receiving cell sends [`ACK_BYTE`] once
//! it faces the right way and starts its belt immediately. The forwarding
//! cell does not inspect what it gets back: the first byte after its
//! command means "ready", the next one means "arrived".

/// Acknowledgement byte sent by a receiving cell
///
/// Used both for "ready to receive" and for "item received".
pub const ACK_BYTE: u8 = 10;

/// Signal a cell emits or waits for at each handshake point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handshake {
    /// Write [`ACK_BYTE`] and proceed in the same tick
    Announce,
    /// Proceed once any byte arrives; content is ignored
    AwaitAny,
    /// Nothing to exchange
    Silent,
}

impl Handshake {
    /// Byte to emit for this signal, if it emits one
    pub fn byte(self) -> Option<u8> {
        match self {
            Handshake::Announce => Some(ACK_BYTE),
            Handshake::AwaitAny | Handshake::Silent => None,
        }
    }
}

impl crate::Skill {
    /// Exchange before the belt starts
    pub fn ready_signal(self) -> Handshake {
        match self {
            crate::Skill::ReceiveFrom => Handshake::Announce,
            crate::Skill::ForwardTo => Handshake::AwaitAny,
        }
    }

    /// Exchange on completion
    ///
    /// A forwarding cell completes on the byte it receives and sends nothing
    /// itself.
    pub fn done_signal(self) -> Handshake {
        match self {
            crate::Skill::ReceiveFrom => Handshake::Announce,
            crate::Skill::ForwardTo => Handshake::Silent,
        }
    }
}
