//! Modcell - Transport Cell Firmware
//!
//! Runs one cell of a modular conveyor on an RP2040. Commands and
//! acknowledgements travel over UART0; the turntable and belt are driven
//! through two H-bridges.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod tasks;

include!(concat!(env!("OUT_DIR"), "/cell_config.rs"));

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Modcell firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = CELL_CONFIG;
    info!("Configuration: {}", config);

    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.baudrate;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", config.baudrate);

    let pins = board::SensorMotorPins {
        light_barrier: p.PIN_2,
        home_switch: p.PIN_3,
        quarter_switch: p.PIN_4,
        rotation_a: p.PIN_6,
        rotation_b: p.PIN_7,
        translation_a: p.PIN_8,
        translation_b: p.PIN_9,
    };
    let cell = board::build_cell(pins, config.sensors, rx, tx);

    spawner.spawn(tasks::cell_task(cell, config)).unwrap();

    info!("Cell task spawned, firmware running");
}
