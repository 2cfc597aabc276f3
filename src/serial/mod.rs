//! Serial transport: port discovery, the device session, and replay sources.
//!
//! Sessions read the device through the [`LineSource`] trait so the protocol
//! loops never touch `serialport` directly. The real implementation wraps a
//! serial port; [`ReplaySource`] feeds lines from a capture file, which is how
//! the integration tests drive full sessions without hardware.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, SerialPortType, StopBits};

use crate::errors::{AppError, AppResult};

/// Default baud rate of the kiosk firmware.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Read timeout used as the poll granularity on the real port.
const READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Settle delay after opening the port; the board resets on DTR toggle.
const SETTLE_DELAY: Duration = Duration::from_secs(2);

/// One poll of a line source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A complete line was available.
    Line(String),
    /// Nothing buffered right now; poll again later.
    Idle,
    /// The source will never produce another line.
    Closed,
}

/// A reliable, ordered, line-delimited text channel to the device.
pub trait LineSource {
    fn next_line(&mut self) -> AppResult<LineEvent>;
    fn send_line(&mut self, line: &str) -> AppResult<()>;
}

/// Information about one detected serial port.
#[derive(Debug, Clone)]
pub struct PortInfo {
    pub path: String,
    pub kind: String,
    pub product: Option<String>,
}

/// List all available serial ports.
pub fn list_ports() -> AppResult<Vec<PortInfo>> {
    let ports = serialport::available_ports()?;
    Ok(ports
        .into_iter()
        .map(|p| {
            let (kind, product) = match p.port_type {
                SerialPortType::UsbPort(info) => ("USB".to_string(), info.product),
                SerialPortType::PciPort => ("PCI".to_string(), None),
                SerialPortType::BluetoothPort => ("Bluetooth".to_string(), None),
                SerialPortType::Unknown => ("Unknown".to_string(), None),
            };
            PortInfo {
                path: p.port_name,
                kind,
                product,
            }
        })
        .collect())
}

/// Find the port the kiosk board is attached to: the first USB serial port,
/// or any port whose name carries the usual USB/ACM markers.
pub fn discover() -> AppResult<String> {
    let ports = list_ports()?;
    ports
        .iter()
        .find(|p| p.kind == "USB" || p.path.contains("USB") || p.path.contains("ACM"))
        .map(|p| p.path.clone())
        .ok_or(AppError::DeviceNotFound)
}

/// An open serial channel to the kiosk board. Owns the port for the lifetime
/// of the session.
pub struct DeviceSession {
    port: Box<dyn SerialPort>,
}

impl DeviceSession {
    /// Open the port at 8N1 and wait for the board to come back up.
    pub fn open(path: &str, baud_rate: u32) -> AppResult<Self> {
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(READ_TIMEOUT)
            .open()?;

        thread::sleep(SETTLE_DELAY);
        Ok(Self { port })
    }
}

impl LineSource for DeviceSession {
    /// Read one line, byte-wise up to `\n`. A read timeout with nothing
    /// buffered is reported as [`LineEvent::Idle`]; the serial channel itself
    /// never closes.
    fn next_line(&mut self) -> AppResult<LineEvent> {
        let mut buffer = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            match self.port.read(&mut byte) {
                Ok(1) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    buffer.push(byte[0]);
                }
                Ok(_) => {
                    if buffer.is_empty() {
                        return Ok(LineEvent::Idle);
                    }
                    break;
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::TimedOut => {
                    if buffer.is_empty() {
                        return Ok(LineEvent::Idle);
                    }
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }

        Ok(LineEvent::Line(String::from_utf8_lossy(&buffer).to_string()))
    }

    fn send_line(&mut self, line: &str) -> AppResult<()> {
        self.port.write_all(line.as_bytes())?;
        self.port.write_all(b"\n")?;
        self.port.flush()?;
        Ok(())
    }
}

/// Line source backed by a capture file: one device line per file line.
/// Host commands are discarded. EOF closes the source.
pub struct ReplaySource {
    reader: BufReader<File>,
}

impl ReplaySource {
    pub fn open(path: &Path) -> AppResult<Self> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
        })
    }
}

impl LineSource for ReplaySource {
    fn next_line(&mut self) -> AppResult<LineEvent> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return Ok(LineEvent::Closed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(LineEvent::Line(line))
    }

    fn send_line(&mut self, _line: &str) -> AppResult<()> {
        Ok(())
    }
}
