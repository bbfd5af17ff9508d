//! QSPI NOR flash, driven through the controller's manual mode
//!
//! [`Flash`] issues the standard serial NOR commands one byte at a time. [`BlockDevice`] carves
//! a block addressed region out of it for a filesystem.

use core::marker::PhantomData;

use embassy_hal_internal::{into_ref, Peripheral};
use embedded_storage::nor_flash::NorFlashErrorKind;

use crate::clocks::{ClockTree, GateMode, PeripheralClock};
use crate::pac::qspi::regs::{Raw, Status as QspiStatus};
use crate::pac::qspi::Qspi;
use crate::peripherals;
use crate::status::Status;

/// Flash page size.
pub const PAGE_SIZE: usize = 256;
/// Flash write size.
pub const WRITE_SIZE: usize = 1;
/// Flash read size.
pub const READ_SIZE: usize = 1;
/// Flash erase size.
pub const ERASE_SIZE: usize = 4096;

const CMD_WRITE_ENABLE: u8 = 0x06;
const CMD_READ: u8 = 0x03;
const CMD_PAGE_PROGRAM: u8 = 0x02;
const CMD_SECTOR_ERASE: u8 = 0x20;
const CMD_READ_STATUS: u8 = 0x05;

/// Write in progress bit of the flash status register
const STATUS_WIP: u8 = 1 << 0;
/// Manual read count, 10 low and 5 high bits
const MAX_READ_COUNT: usize = 0x7fff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidParameter,
    OutOfBounds,
    NotAligned,
    Timeout,
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidParameter | Error::NotAligned => Status::InvalidParameter,
            Error::OutOfBounds => Status::InvalidRange,
            Error::Timeout => Status::Timeout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Device size in bytes
    pub capacity: u32,
    /// Manual mode chip select line
    pub chip_select: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 4 * 1024 * 1024,
            chip_select: 0,
        }
    }
}

// - MARK: Flash driver

/// Flash driver. Addresses are device offsets, not memory mapped addresses.
pub struct Flash<'d> {
    regs: Qspi,
    config: Config,
    poll_limit: u32,
    _phantom: PhantomData<&'d ()>,
}

impl<'d> Flash<'d> {
    /// Gates the QSPI clock on. The clock source and divider stay as the boot code left them.
    pub fn new<T: Instance>(_periph: impl Peripheral<P = T> + 'd, clocks: &mut ClockTree, config: Config) -> Self {
        into_ref!(_periph);
        clocks.peripheral_clk_enable(PeripheralClock::Qspi, GateMode::Static);
        Self::new_inner(T::REGS, clocks.poll_limit(), config)
    }

    pub(crate) fn new_inner(regs: Qspi, poll_limit: u32, config: Config) -> Self {
        Self {
            regs,
            config,
            poll_limit,
            _phantom: PhantomData,
        }
    }

    /// Flash capacity.
    pub fn capacity(&self) -> usize {
        self.config.capacity as usize
    }

    fn check_range(&self, offset: u32, len: usize) -> Result<(), Error> {
        match offset.checked_add(len as u32) {
            Some(end) if len <= u32::MAX as usize && end <= self.config.capacity => Ok(()),
            _ => Err(Error::OutOfBounds),
        }
    }

    /// Blocking read.
    pub fn blocking_read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Error> {
        self.check_range(offset, bytes.len())?;
        if bytes.is_empty() {
            return Ok(());
        }
        self.command(CMD_READ, Some(offset), |f| f.read_bytes(bytes))
    }

    /// Blocking write, split at page boundaries. The range must have been erased.
    pub fn blocking_write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Error> {
        self.check_range(offset, bytes.len())?;
        let mut addr = offset;
        let mut rest = bytes;
        while !rest.is_empty() {
            let (chunk, tail) = rest.split_at(page_span(addr, rest.len()));
            self.write_enable()?;
            self.command(CMD_PAGE_PROGRAM, Some(addr), |f| f.write_bytes(chunk))?;
            self.wait_ready()?;
            addr += chunk.len() as u32;
            rest = tail;
        }
        Ok(())
    }

    /// Blocking erase of `[from, to)`, both on sector boundaries.
    pub fn blocking_erase(&mut self, from: u32, to: u32) -> Result<(), Error> {
        if from > to {
            return Err(Error::InvalidParameter);
        }
        if from as usize % ERASE_SIZE != 0 || to as usize % ERASE_SIZE != 0 {
            return Err(Error::NotAligned);
        }
        self.check_range(from, (to - from) as usize)?;
        for sector in (from..to).step_by(ERASE_SIZE) {
            self.write_enable()?;
            self.command(CMD_SECTOR_ERASE, Some(sector), |_| Ok(()))?;
            self.wait_ready()?;
        }
        Ok(())
    }

    /// Polls the flash status register until the write in progress bit clears.
    pub fn wait_ready(&mut self) -> Result<(), Error> {
        for _ in 0..self.poll_limit {
            let mut status = [0u8];
            self.command(CMD_READ_STATUS, None, |f| f.read_bytes(&mut status))?;
            if status[0] & STATUS_WIP == 0 {
                return Ok(());
            }
        }
        Err(Error::Timeout)
    }

    fn write_enable(&mut self) -> Result<(), Error> {
        self.command(CMD_WRITE_ENABLE, None, |_| Ok(()))
    }

    // - MARK: manual mode

    /// Runs one chip select framed command: opcode, optional 24 bit address, then `data`.
    fn command(
        &self,
        opcode: u8,
        addr: Option<u32>,
        data: impl FnOnce(&Self) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let r = self.regs;
        let auto = r.qspi_bus_mode().read().auto_mode();
        r.qspi_bus_mode().modify(|w| w.set_auto_mode(false));
        r.qspi_manual_config().modify(|w| {
            w.set_manual_csn_select(self.config.chip_select);
            w.set_csn_active(false);
        });

        let res = self.write_bytes(&[opcode]).and_then(|_| {
            if let Some(addr) = addr {
                self.write_bytes(&addr.to_be_bytes()[1..])?;
            }
            data(self)
        });

        r.qspi_manual_config().modify(|w| w.set_csn_active(true));
        r.qspi_bus_mode().modify(|w| w.set_auto_mode(auto));
        res
    }

    fn write_bytes(&self, bytes: &[u8]) -> Result<(), Error> {
        let r = self.regs;
        for &byte in bytes {
            r.qspi_manual_write_data_2().write(|w| w.set_write_len(8));
            r.qspi_manual_rd_wr_data().write_value(Raw(byte as u32));
            r.qspi_manual_config().modify(|w| w.set_write_trigger(true));
            self.wait(|s| !s.qspi_busy())?;
        }
        Ok(())
    }

    fn read_bytes(&self, bytes: &mut [u8]) -> Result<(), Error> {
        let r = self.regs;
        for chunk in bytes.chunks_mut(MAX_READ_COUNT) {
            let count = chunk.len();
            r.qspi_manual_config().modify(|w| {
                w.set_manual_size(0);
                w.set_manual_rd_cnt((count & 0x3ff) as u16);
                w.set_manual_rd_cnt_hi((count >> 10) as u8);
                w.set_read_trigger(true);
            });
            for byte in chunk.iter_mut() {
                self.wait(|s| !s.fifo_empty_rfifo())?;
                *byte = r.qspi_manual_rd_wr_data().read().0 as u8;
            }
            self.wait(|s| !s.qspi_busy())?;
        }
        Ok(())
    }

    fn wait(&self, mut done: impl FnMut(QspiStatus) -> bool) -> Result<(), Error> {
        for _ in 0..self.poll_limit {
            if done(self.regs.qspi_status().read()) {
                return Ok(());
            }
        }
        Err(Error::Timeout)
    }
}

/// Bytes from `addr` to the end of its page, at most `len`.
fn page_span(addr: u32, len: usize) -> usize {
    let left = PAGE_SIZE - addr as usize % PAGE_SIZE;
    left.min(len)
}

// - MARK: Block device

/// Block layout of a flash region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Device offset of block 0, sector aligned
    pub base: u32,
    /// Multiple of [`ERASE_SIZE`]
    pub block_size: u32,
    pub block_count: u32,
}

/// Block addressed view of a flash region, the shape a filesystem expects.
///
/// Block `n`, offset `o` lives at `base + n * block_size + o`.
pub struct BlockDevice<'d> {
    flash: Flash<'d>,
    geometry: Geometry,
}

impl<'d> BlockDevice<'d> {
    pub fn new(flash: Flash<'d>, geometry: Geometry) -> Result<Self, Error> {
        let g = geometry;
        if g.block_size == 0 || g.block_count == 0 {
            return Err(Error::InvalidParameter);
        }
        if g.base as usize % ERASE_SIZE != 0 || g.block_size as usize % ERASE_SIZE != 0 {
            return Err(Error::NotAligned);
        }
        let size = g.block_size.checked_mul(g.block_count).ok_or(Error::OutOfBounds)?;
        flash.check_range(g.base, size as usize)?;
        Ok(Self { flash, geometry })
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Device offset of `offset` in `block`, with `len` bytes checked to stay inside it.
    pub fn address(&self, block: u32, offset: u32, len: usize) -> Result<u32, Error> {
        let g = &self.geometry;
        let end = (offset as usize).checked_add(len);
        if block >= g.block_count || end.map_or(true, |end| end > g.block_size as usize) {
            return Err(Error::OutOfBounds);
        }
        block
            .checked_mul(g.block_size)
            .and_then(|a| a.checked_add(g.base))
            .and_then(|a| a.checked_add(offset))
            .ok_or(Error::OutOfBounds)
    }

    pub fn read(&mut self, block: u32, offset: u32, buf: &mut [u8]) -> Result<(), Error> {
        let addr = self.address(block, offset, buf.len())?;
        trace!("flash read {:x} +{}", addr, buf.len());
        self.flash.blocking_read(addr, buf)
    }

    pub fn prog(&mut self, block: u32, offset: u32, data: &[u8]) -> Result<(), Error> {
        let addr = self.address(block, offset, data.len())?;
        trace!("flash prog {:x} +{}", addr, data.len());
        self.flash.blocking_write(addr, data)
    }

    pub fn erase(&mut self, block: u32) -> Result<(), Error> {
        let addr = self.address(block, 0, 0)?;
        trace!("flash erase {:x}", addr);
        self.flash.blocking_erase(addr, addr + self.geometry.block_size)
    }

    /// Programs complete before returning, so this only waits out a pending one.
    pub fn sync(&mut self) -> Result<(), Error> {
        self.flash.wait_ready()
    }

    pub fn release(self) -> Flash<'d> {
        self.flash
    }
}

// - MARK: Traits

trait SealedInstance {
    const REGS: Qspi;
}

/// Flash instance.
#[allow(private_bounds)]
pub trait Instance: SealedInstance + Peripheral<P = Self> + 'static {}

impl SealedInstance for peripherals::QSPI {
    const REGS: Qspi = crate::pac::QSPI;
}
impl Instance for peripherals::QSPI {}

impl embedded_storage::nor_flash::NorFlashError for Error {
    fn kind(&self) -> NorFlashErrorKind {
        match *self {
            Error::OutOfBounds => NorFlashErrorKind::OutOfBounds,
            Error::NotAligned => NorFlashErrorKind::NotAligned,
            _ => NorFlashErrorKind::Other,
        }
    }
}

impl<'d> embedded_storage::nor_flash::ErrorType for Flash<'d> {
    type Error = Error;
}

impl<'d> embedded_storage::nor_flash::ReadNorFlash for Flash<'d> {
    const READ_SIZE: usize = READ_SIZE;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        self.blocking_read(offset, bytes)
    }

    fn capacity(&self) -> usize {
        self.capacity()
    }
}

impl<'d> embedded_storage::nor_flash::NorFlash for Flash<'d> {
    const WRITE_SIZE: usize = WRITE_SIZE;

    const ERASE_SIZE: usize = ERASE_SIZE;

    fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        self.blocking_erase(from, to)
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        self.blocking_write(offset, bytes)
    }
}

#[cfg(test)]
mod tests {
    use embedded_storage::nor_flash::{NorFlash, NorFlashError, ReadNorFlash};

    use super::*;
    use crate::pac::mock;

    fn flash() -> Flash<'static> {
        Flash::new_inner(mock::qspi(), 16, Config::default())
    }

    fn geometry() -> Geometry {
        Geometry {
            base: 0x10_0000,
            block_size: 4096,
            block_count: 16,
        }
    }

    #[test]
    fn geometry_is_checked() {
        let bad = [
            (Geometry { block_count: 0, ..geometry() }, Error::InvalidParameter),
            (Geometry { base: 0x10_0100, ..geometry() }, Error::NotAligned),
            (Geometry { block_size: 512, ..geometry() }, Error::NotAligned),
            (Geometry { block_count: 1024, ..geometry() }, Error::OutOfBounds),
            (Geometry { block_size: 0x8000_0000, block_count: 4, ..geometry() }, Error::OutOfBounds),
        ];
        for (g, err) in bad {
            assert_eq!(BlockDevice::new(flash(), g).err(), Some(err));
        }
        assert!(BlockDevice::new(flash(), geometry()).is_ok());
    }

    #[test]
    fn block_addressing() {
        let dev = BlockDevice::new(flash(), geometry()).unwrap();
        assert_eq!(dev.address(0, 0, 16), Ok(0x10_0000));
        assert_eq!(dev.address(3, 0x10, 16), Ok(0x10_3010));
        assert_eq!(dev.address(15, 4095, 1), Ok(0x10_ffff));
        assert_eq!(dev.address(16, 0, 0), Err(Error::OutOfBounds));
        assert_eq!(dev.address(2, 4090, 7), Err(Error::OutOfBounds));
    }

    #[test]
    fn out_of_bounds_is_rejected_before_the_bus() {
        let mut dev = BlockDevice::new(flash(), geometry()).unwrap();
        let mut buf = [0u8; 8];
        assert_eq!(dev.read(16, 0, &mut buf), Err(Error::OutOfBounds));
        assert_eq!(dev.prog(0, 4092, &buf), Err(Error::OutOfBounds));
        assert_eq!(dev.erase(20), Err(Error::OutOfBounds));
        assert_eq!(dev.address(0, 1, usize::MAX), Err(Error::OutOfBounds));
        assert_eq!(dev.address(0, u32::MAX, 16), Err(Error::OutOfBounds));
        assert_eq!(dev.address(3, 4095, 1), Ok(0x10_0000 + 3 * 4096 + 4095));
        let mut f = dev.release();
        assert_eq!(f.blocking_read(0x3f_fffc, &mut buf), Err(Error::OutOfBounds));
        assert_eq!(f.blocking_erase(0, 100), Err(Error::NotAligned));
        assert_eq!(f.blocking_erase(0x2000, 0x1000), Err(Error::InvalidParameter));
        assert_eq!(f.blocking_erase(0x3f_f000, 0x40_1000), Err(Error::OutOfBounds));
    }

    #[test]
    fn page_boundaries() {
        assert_eq!(page_span(0, 1000), 256);
        assert_eq!(page_span(0x1f0, 1000), 16);
        assert_eq!(page_span(0x100, 3), 3);
    }

    #[test]
    fn read_runs_a_manual_command() {
        let mut f = flash();
        let r = f.regs;
        r.qspi_bus_mode().modify(|w| w.set_auto_mode(true));
        let mut buf = [0u8; 4];
        f.blocking_read(0x12_3456, &mut buf).unwrap();

        let cfg = r.qspi_manual_config().read();
        assert_eq!(cfg.manual_rd_cnt(), 4);
        assert!(cfg.csn_active());
        assert_eq!(r.qspi_manual_write_data_2().read().write_len(), 8);
        // the data register is shared between directions, the last address byte is still there
        assert_eq!(buf, [0x56; 4]);
        assert!(r.qspi_bus_mode().read().auto_mode());
    }

    #[test]
    fn long_reads_split_the_count() {
        let mut f = flash();
        let mut buf = vec![0u8; MAX_READ_COUNT + 5];
        f.blocking_read(0, &mut buf).unwrap();
        let cfg = f.regs.qspi_manual_config().read();
        assert_eq!((cfg.manual_rd_cnt(), cfg.manual_rd_cnt_hi()), (5, 0));
    }

    #[test]
    fn busy_controller_times_out() {
        let mut f = flash();
        let mut busy = QspiStatus(0);
        busy.set_qspi_busy(true);
        mock::poke(f.regs.qspi_status(), busy);
        assert_eq!(f.blocking_write(0, &[1, 2, 3]), Err(Error::Timeout));
        // chip select released on the error path
        assert!(f.regs.qspi_manual_config().read().csn_active());

        let mut empty = QspiStatus(0);
        empty.set_fifo_empty_rfifo(true);
        mock::poke(f.regs.qspi_status(), empty);
        let mut buf = [0u8; 1];
        assert_eq!(f.blocking_read(0, &mut buf), Err(Error::Timeout));
    }

    #[test]
    fn program_polls_write_in_progress() {
        let mut f = flash();
        // a status read returns the RDSR opcode left in the shared data register, WIP set
        assert_eq!(f.blocking_write(0x200, &[0xaa, 0xbb]), Err(Error::Timeout));
        assert_eq!(f.regs.qspi_manual_rd_wr_data().read().0, CMD_READ_STATUS as u32);
        assert_eq!(f.blocking_erase(0x1000, 0x3000), Err(Error::Timeout));
        assert_eq!(NorFlash::write(&mut f, 0x10, &[0x00]), Err(Error::Timeout));
        assert_eq!(ReadNorFlash::capacity(&f), 4 * 1024 * 1024);
    }

    #[test]
    fn error_kinds() {
        assert_eq!(Error::OutOfBounds.kind(), NorFlashErrorKind::OutOfBounds);
        assert_eq!(Error::NotAligned.kind(), NorFlashErrorKind::NotAligned);
        assert_eq!(Error::Timeout.kind(), NorFlashErrorKind::Other);
        assert_eq!(Status::from(Error::OutOfBounds), Status::InvalidRange);
    }
}
