mod tests {
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    use embedded_hal::digital::{self, OutputPin};
    use embedded_hal::spi::{self, ErrorKind, SpiBus};
    use myrtio_matrix_composer::{
        FrameBuffer, OutputDriver, ShiftRegisterDriver, ShiftRegisterError,
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        LatchHigh,
        LatchLow,
        OutputEnableHigh,
        OutputEnableLow,
        Write(Vec<u8>),
        Flush,
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug)]
    struct BusError;

    impl spi::Error for BusError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct FakeSpi {
        log: Log,
        fail: bool,
    }

    impl spi::ErrorType for FakeSpi {
        type Error = BusError;
    }

    impl SpiBus for FakeSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(BusError);
            }
            self.log.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    struct FakePin {
        log: Log,
        high: Event,
        low: Event,
    }

    impl digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(self.low.clone());
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(self.high.clone());
            Ok(())
        }
    }

    fn driver(fail: bool) -> (ShiftRegisterDriver<FakeSpi, FakePin, FakePin>, Log) {
        let log: Log = Rc::default();
        let spi = FakeSpi {
            log: Rc::clone(&log),
            fail,
        };
        let latch = FakePin {
            log: Rc::clone(&log),
            high: Event::LatchHigh,
            low: Event::LatchLow,
        };
        let output_enable = FakePin {
            log: Rc::clone(&log),
            high: Event::OutputEnableHigh,
            low: Event::OutputEnableLow,
        };
        (ShiftRegisterDriver::new(spi, latch, output_enable), log)
    }

    #[test]
    fn test_write_blanks_shifts_and_latches() {
        let (mut driver, log) = driver(false);
        let mut frame = FrameBuffer::default();
        frame.set_pixel(0, 0, true);

        driver.write(&frame).unwrap();

        let mut expected_bytes = vec![0; 32];
        expected_bytes[0] = 0x80;
        assert_eq!(
            *log.borrow(),
            vec![
                Event::OutputEnableHigh,
                Event::LatchLow,
                Event::Write(expected_bytes),
                Event::Flush,
                Event::LatchHigh,
                Event::OutputEnableLow,
            ]
        );
    }

    #[test]
    fn test_disabled_output_stays_blank() {
        let (mut driver, log) = driver(false);
        driver.set_output_enabled(false).unwrap();
        assert!(!driver.output_enabled());
        log.borrow_mut().clear();

        driver.write(&FrameBuffer::default()).unwrap();
        assert_eq!(log.borrow().last(), Some(&Event::LatchHigh));
        assert!(!log.borrow().contains(&Event::OutputEnableLow));

        driver.set_output_enabled(true).unwrap();
        assert_eq!(log.borrow().last(), Some(&Event::OutputEnableLow));
    }

    #[test]
    fn test_spi_failure_is_reported() {
        let (mut driver, log) = driver(true);
        let result = driver.write(&FrameBuffer::default());
        assert!(matches!(result, Err(ShiftRegisterError::Spi(BusError))));
        // Panel left blanked with the latch open
        assert_eq!(
            *log.borrow(),
            vec![Event::OutputEnableHigh, Event::LatchLow]
        );
    }
}
