//! Test doubles shared by the driver tests
//!
//! - [`SimBus`]: a wired-AND two-line bus that detects start/stop
//!   conditions and clocks a [`Ds1621Model`] slave on every edge
//! - [`MockLine`]: a lone open-drain pin
//! - [`CountingDelay`]: records every delay request
//! - [`ShiftChain`]: two chained 74HC595s watching data/clock/latch

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use thermion_hal::{InputPin, OpenDrainPin, OutputPin};

use crate::bus::BitBangI2c;

/// Settle delay used by simulated buses (µs)
pub const SIM_SETTLE_US: u32 = 10;

/// What the bus saw, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    /// Data fell while clock was high
    Start,
    /// Data rose while clock was high
    Stop,
    /// Clock rose; data level at that moment
    Bit(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Scl,
    Sda,
}

/// Simulated bus with one DS1621 attached
pub struct SimBus {
    scl_low: bool,
    sda_low: bool,
    /// Clock reads high no matter who pulls it (shorted to VCC)
    pub scl_stuck_high: bool,
    trace: Vec<Wire, 2048>,
    pub device: Ds1621Model,
}

impl SimBus {
    pub fn new(device: Ds1621Model) -> Self {
        Self {
            scl_low: false,
            sda_low: false,
            scl_stuck_high: false,
            trace: Vec::new(),
            device,
        }
    }

    fn scl(&self) -> bool {
        !self.scl_low || self.scl_stuck_high
    }

    fn sda(&self) -> bool {
        !(self.sda_low || self.device.sda_low)
    }

    fn level(&self, line: Line) -> bool {
        match line {
            Line::Scl => self.scl(),
            Line::Sda => self.sda(),
        }
    }

    fn drive(&mut self, line: Line, low: bool) {
        let scl_before = self.scl();
        let sda_before = self.sda();

        match line {
            Line::Scl => self.scl_low = low,
            Line::Sda => self.sda_low = low,
        }

        let scl = self.scl();
        let sda = self.sda();

        if scl != scl_before {
            if scl {
                self.record(Wire::Bit(sda));
                self.device.clock_rise(sda);
            } else {
                self.device.clock_fall();
            }
        } else if scl && sda != sda_before {
            if sda {
                self.record(Wire::Stop);
                self.device.stop();
            } else {
                self.record(Wire::Start);
                self.device.start();
            }
        }
    }

    fn record(&mut self, wire: Wire) {
        self.trace.push(wire).expect("trace full");
    }

    pub fn trace(&self) -> &[Wire] {
        &self.trace
    }

    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    pub fn starts(&self) -> usize {
        self.trace.iter().filter(|w| **w == Wire::Start).count()
    }

    pub fn stops(&self) -> usize {
        self.trace.iter().filter(|w| **w == Wire::Stop).count()
    }

    pub fn is_idle(&self) -> bool {
        self.scl() && self.sda()
    }
}

/// Master-side pin on a [`SimBus`]
pub struct SimLine<'a> {
    bus: &'a RefCell<SimBus>,
    line: Line,
    driving_low: bool,
}

impl InputPin for SimLine<'_> {
    fn is_high(&self) -> bool {
        self.bus.borrow().level(self.line)
    }
}

impl OpenDrainPin for SimLine<'_> {
    fn release(&mut self) {
        self.driving_low = false;
        self.bus.borrow_mut().drive(self.line, false);
    }

    fn drive_low(&mut self) {
        self.driving_low = true;
        self.bus.borrow_mut().drive(self.line, true);
    }

    fn is_driving_low(&self) -> bool {
        self.driving_low
    }
}

/// Bit-bang master wired to a simulated bus
pub fn sim_bus(bus: &RefCell<SimBus>) -> BitBangI2c<SimLine<'_>, SimLine<'_>, CountingDelay> {
    let scl = SimLine {
        bus,
        line: Line::Scl,
        driving_low: false,
    };
    let sda = SimLine {
        bus,
        line: Line::Sda,
        driving_low: false,
    };
    BitBangI2c::new(scl, sda, CountingDelay::default(), SIM_SETTLE_US)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting for a start
    Idle,
    /// Shifting in the address byte
    Address,
    /// Holding data low for the address ack
    AckAddress { read: bool },
    /// Shifting in a data byte
    Receive,
    /// Holding data low for a data ack
    AckData,
    /// Shifting out a data byte
    Transmit,
    /// Master's ack slot after a transmitted byte
    MasterAck,
}

/// Behavioural DS1621 slave
///
/// Only the opcodes the thermometer uses are modelled: access config
/// (0xAC), start convert (0xEE) and read temperature (0xAA).
pub struct Ds1621Model {
    /// 7-bit bus address
    pub address: u8,
    /// Answer our address with an ack
    pub acknowledge_address: bool,
    /// Command byte to refuse with a NACK
    pub reject_command: Option<u8>,
    /// Configuration/status register
    pub config: u8,
    /// Temperature register (MSB, LSB)
    pub temperature: [u8; 2],
    /// Start-convert commands accepted
    pub conversions_started: u32,
    /// Temperature register reads begun
    pub temperature_reads: u32,
    /// Payload bytes written to the config register
    pub config_writes: Vec<u8, 16>,
    master_acks: Vec<bool, 256>,
    sda_low: bool,
    phase: Phase,
    shift: u8,
    bits: u8,
    pointer: Option<u8>,
    data_index: usize,
    read_index: usize,
    tx: u8,
    master_acked: bool,
}

impl Ds1621Model {
    pub const DONE: u8 = 0x80;

    pub fn new(address: u8) -> Self {
        Self {
            address,
            acknowledge_address: true,
            reject_command: None,
            // Nothing converting after power-up; one-shot not yet set
            config: Self::DONE,
            temperature: [0, 0],
            conversions_started: 0,
            temperature_reads: 0,
            config_writes: Vec::new(),
            master_acks: Vec::new(),
            sda_low: false,
            phase: Phase::Idle,
            shift: 0,
            bits: 0,
            pointer: None,
            data_index: 0,
            read_index: 0,
            tx: 0xFF,
            master_acked: false,
        }
    }

    /// Finish the running conversion with a new result
    pub fn complete_conversion(&mut self, msb: u8, lsb: u8) {
        self.temperature = [msb, lsb];
        self.config |= Self::DONE;
    }

    /// Ack (true) / nack (false) the master gave after each byte read
    pub fn master_acks(&self) -> &[bool] {
        &self.master_acks
    }

    fn start(&mut self) {
        self.phase = Phase::Address;
        self.shift = 0;
        self.bits = 0;
        self.sda_low = false;
    }

    fn stop(&mut self) {
        self.phase = Phase::Idle;
        self.sda_low = false;
    }

    fn clock_rise(&mut self, sda: bool) {
        match self.phase {
            Phase::Address | Phase::Receive => {
                self.shift = (self.shift << 1) | sda as u8;
                self.bits += 1;
            }
            Phase::Transmit => self.bits += 1,
            Phase::MasterAck => {
                self.master_acked = !sda;
                self.master_acks.push(!sda).expect("ack log full");
            }
            _ => {}
        }
    }

    fn clock_fall(&mut self) {
        match self.phase {
            Phase::Address if self.bits == 8 => {
                let byte = self.take_byte();
                if byte >> 1 == self.address && self.acknowledge_address {
                    let read = byte & 1 == 1;
                    if !read {
                        self.data_index = 0;
                    }
                    self.sda_low = true;
                    self.phase = Phase::AckAddress { read };
                } else {
                    self.phase = Phase::Idle;
                }
            }
            Phase::Receive if self.bits == 8 => {
                let byte = self.take_byte();
                if self.data_index == 0 && self.reject_command == Some(byte) {
                    self.phase = Phase::Idle;
                } else {
                    self.receive(byte);
                    self.sda_low = true;
                    self.phase = Phase::AckData;
                }
            }
            Phase::AckAddress { read: true } => {
                self.read_index = 0;
                if self.pointer == Some(0xAA) {
                    self.temperature_reads += 1;
                }
                self.begin_transmit();
            }
            Phase::AckAddress { read: false } | Phase::AckData => {
                self.sda_low = false;
                self.phase = Phase::Receive;
            }
            Phase::Transmit => {
                if self.bits == 8 {
                    self.sda_low = false;
                    self.phase = Phase::MasterAck;
                } else {
                    self.drive_tx_bit();
                }
            }
            Phase::MasterAck => {
                if self.master_acked {
                    self.read_index += 1;
                    self.begin_transmit();
                } else {
                    self.phase = Phase::Idle;
                }
            }
            _ => {}
        }
    }

    fn take_byte(&mut self) -> u8 {
        let byte = self.shift;
        self.shift = 0;
        self.bits = 0;
        byte
    }

    fn receive(&mut self, byte: u8) {
        match (self.data_index, self.pointer) {
            (0, _) => {
                self.pointer = Some(byte);
                if byte == 0xEE {
                    self.conversions_started += 1;
                    self.config &= !Self::DONE;
                }
            }
            (1, Some(0xAC)) => {
                // Only POL and 1SHOT are writable in this model
                self.config = (self.config & !0b11) | (byte & 0b11);
                self.config_writes.push(byte).expect("config log full");
            }
            _ => {}
        }
        self.data_index += 1;
    }

    fn begin_transmit(&mut self) {
        self.tx = match (self.pointer, self.read_index) {
            (Some(0xAA), index) => self.temperature[index.min(1)],
            (Some(0xAC), 0) => self.config,
            _ => 0xFF,
        };
        self.bits = 0;
        self.phase = Phase::Transmit;
        self.drive_tx_bit();
    }

    fn drive_tx_bit(&mut self) {
        let bit = (self.tx >> (7 - self.bits)) & 1;
        self.sda_low = bit == 0;
    }
}

/// Stand-alone open-drain pin with a pull-up
pub struct MockLine {
    driving_low: bool,
    /// Some other device is holding the wire low
    pub held_low_externally: bool,
}

impl MockLine {
    pub fn new() -> Self {
        Self {
            driving_low: false,
            held_low_externally: false,
        }
    }
}

impl InputPin for MockLine {
    fn is_high(&self) -> bool {
        !(self.driving_low || self.held_low_externally)
    }
}

impl OpenDrainPin for MockLine {
    fn release(&mut self) {
        self.driving_low = false;
    }

    fn drive_low(&mut self) {
        self.driving_low = true;
    }

    fn is_driving_low(&self) -> bool {
        self.driving_low
    }
}

/// Delay that only counts
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub calls: u32,
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += ns as u64;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShiftRole {
    Data,
    Clock,
    Latch,
}

/// Two daisy-chained 74HC595s
///
/// Bits are captured on clock rising edges; a latch rising edge moves
/// the last sixteen bits into [`latched`](Self::latched) as
/// `[first byte shifted, second byte shifted]`, each reassembled LSB first.
#[derive(Default)]
pub struct ShiftChain {
    data: bool,
    clock: bool,
    latch: bool,
    bits: Vec<bool, 64>,
    latched: Vec<[u8; 2], 16>,
}

impl ShiftChain {
    pub fn latched(&self) -> &[[u8; 2]] {
        &self.latched
    }

    pub fn pending_bits(&self) -> usize {
        self.bits.len()
    }

    fn set(&mut self, role: ShiftRole, high: bool) {
        match role {
            ShiftRole::Data => self.data = high,
            ShiftRole::Clock => {
                if high && !self.clock {
                    self.bits.push(self.data).expect("shift log full");
                }
                self.clock = high;
            }
            ShiftRole::Latch => {
                if high && !self.latch {
                    self.latch_outputs();
                }
                self.latch = high;
            }
        }
    }

    fn latch_outputs(&mut self) {
        let start = self.bits.len().saturating_sub(16);
        let mut bytes = [0u8; 2];
        for (i, bit) in self.bits[start..].iter().enumerate() {
            if *bit {
                bytes[i / 8] |= 1 << (i % 8);
            }
        }
        self.latched.push(bytes).expect("latch log full");
        self.bits.clear();
    }

    fn level(&self, role: ShiftRole) -> bool {
        match role {
            ShiftRole::Data => self.data,
            ShiftRole::Clock => self.clock,
            ShiftRole::Latch => self.latch,
        }
    }
}

/// One of the three 74HC595 control pins
pub struct ShiftPin<'a> {
    chain: &'a RefCell<ShiftChain>,
    role: ShiftRole,
}

impl OutputPin for ShiftPin<'_> {
    fn set_high(&mut self) {
        self.chain.borrow_mut().set(self.role, true);
    }

    fn set_low(&mut self) {
        self.chain.borrow_mut().set(self.role, false);
    }

    fn is_set_high(&self) -> bool {
        self.chain.borrow().level(self.role)
    }
}

/// Data, clock and latch pins wired to one chain
pub fn shift_pins(chain: &RefCell<ShiftChain>) -> (ShiftPin<'_>, ShiftPin<'_>, ShiftPin<'_>) {
    (
        ShiftPin {
            chain,
            role: ShiftRole::Data,
        },
        ShiftPin {
            chain,
            role: ShiftRole::Clock,
        },
        ShiftPin {
            chain,
            role: ShiftRole::Latch,
        },
    )
}
