//! Serial line sink for bare-metal execution.
//!
//! Minimal, no-allocation output to a 16550-compatible UART (COM1 by
//! default). A write stops at the first byte the transmitter does not
//! accept within the configured number of polls.

use super::Sink;

/// COM1 base port.
pub const COM1: u16 = 0x3F8;

/// Line Status Register offset from the base port.
const LSR_OFFSET: u16 = 5;

/// LSR bit: transmit holding register empty.
const LSR_THR_EMPTY: u8 = 0x20;

/// UART configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    /// I/O base port.
    pub base: u16,
    /// Status polls per byte before giving up.
    pub ready_retries: u32,
}

impl SerialConfig {
    /// Line Status Register port, or `None` if the register window runs
    /// past the end of the I/O space.
    pub fn lsr_port(&self) -> Option<u16> {
        self.base.checked_add(LSR_OFFSET)
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            base: COM1,
            ready_retries: 100,
        }
    }
}

/// UART transmit side as a [`Sink`].
pub struct SerialPort {
    config: SerialConfig,
    bytes_sent: usize,
}

impl SerialPort {
    /// Create a port handle. No hardware is touched until the first write.
    pub fn new(config: SerialConfig) -> Self {
        Self {
            config,
            bytes_sent: 0,
        }
    }

    /// COM1 with default polling.
    pub fn com1() -> Self {
        Self::new(SerialConfig::default())
    }

    pub fn config(&self) -> &SerialConfig {
        &self.config
    }

    /// Total bytes the transmitter accepted.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Send one byte, waiting (bounded) for the holding register.
    #[cfg(target_arch = "x86_64")]
    fn write_byte(&self, lsr: u16, byte: u8) -> bool {
        unsafe {
            let mut retries = 0u32;
            loop {
                let status: u8;
                core::arch::asm!(
                    "in al, dx",
                    in("dx") lsr,
                    out("al") status,
                    options(nomem, nostack, preserves_flags)
                );
                if status & LSR_THR_EMPTY != 0 {
                    break;
                }
                if retries >= self.config.ready_retries {
                    return false; // Port not responding
                }
                retries += 1;
                core::hint::spin_loop();
            }
            core::arch::asm!(
                "out dx, al",
                in("dx") self.config.base,
                in("al") byte,
                options(nomem, nostack, preserves_flags)
            );
        }
        true
    }

    #[cfg(not(target_arch = "x86_64"))]
    fn write_byte(&self, _lsr: u16, _byte: u8) -> bool {
        false
    }
}

impl Sink for SerialPort {
    fn write(&mut self, buf: &[u8]) -> usize {
        let Some(lsr) = self.config.lsr_port() else {
            return 0;
        };
        let mut sent = 0;
        for &byte in buf {
            if !self.write_byte(lsr, byte) {
                break;
            }
            sent += 1;
        }
        self.bytes_sent += sent;
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_com1() {
        let port = SerialPort::com1();
        assert_eq!(port.config().base, 0x3F8);
        assert_eq!(port.config().ready_retries, 100);
        assert_eq!(port.bytes_sent(), 0);
    }

    #[test]
    fn test_empty_write_touches_nothing() {
        let mut port = SerialPort::com1();
        assert_eq!(port.write(&[]), 0);
        assert_eq!(port.bytes_sent(), 0);
    }

    #[test]
    fn test_base_at_top_of_io_space_makes_no_progress() {
        let config = SerialConfig {
            base: 0xFFFF,
            ready_retries: 1,
        };
        assert_eq!(config.lsr_port(), None);

        let mut port = SerialPort::new(config);
        assert_eq!(port.write(&[1]), 0);
        assert_eq!(crate::write_all(&mut port, &[1, 2, 3]), 0);
        assert_eq!(port.bytes_sent(), 0);
    }

    #[test]
    fn test_lsr_port_of_com1() {
        assert_eq!(SerialConfig::default().lsr_port(), Some(0x3FD));
    }
}
