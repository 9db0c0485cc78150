mod tests {
    use myrtio_matrix_composer::{
        Duration, EffectId, FrameBuffer, FrameScheduler, Instant, IntentChannel,
        MatrixEngineConfig, OutputDriver, Renderer, WallClock,
    };

    // 2024-05-01 14:07:00 UTC
    const UNIX_TIME: i64 = 1_714_572_420;

    struct FixedClock(i64);

    impl WallClock for FixedClock {
        fn unix_time(&self) -> i64 {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<FrameBuffer>,
        fail: bool,
    }

    #[derive(Debug)]
    struct Unplugged;

    impl OutputDriver for RecordingDriver {
        type Error = Unplugged;

        fn write(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
            if self.fail {
                return Err(Unplugged);
            }
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    fn config() -> MatrixEngineConfig {
        MatrixEngineConfig {
            effect: EffectId::Clock,
            ..MatrixEngineConfig::default()
        }
    }

    #[test]
    fn test_ticks_on_a_fixed_cadence() {
        let channel = IntentChannel::<4>::new();
        let renderer = Renderer::new(channel.receiver(), &config());
        let mut scheduler =
            FrameScheduler::new(renderer, RecordingDriver::default(), FixedClock(UNIX_TIME));

        let result = scheduler.tick(Instant::from_millis(0));
        assert!(result.written);
        assert_eq!(result.next_deadline, Instant::from_millis(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(100));

        // Late by 30 ms, the next deadline does not move
        let result = scheduler.tick(Instant::from_millis(130));
        assert_eq!(result.next_deadline, Instant::from_millis(200));
        assert_eq!(result.sleep_duration, Duration::from_millis(70));

        assert_eq!(scheduler.output_mut().frames.len(), 2);
        assert!(!scheduler.output_mut().frames[0].is_blank());
    }

    #[test]
    fn test_skips_backlog_after_stall() {
        let channel = IntentChannel::<4>::new();
        let renderer = Renderer::new(channel.receiver(), &config());
        let mut scheduler =
            FrameScheduler::new(renderer, RecordingDriver::default(), FixedClock(UNIX_TIME));

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(result.next_deadline, Instant::from_millis(1100));
        assert_eq!(result.sleep_duration, Duration::from_millis(100));
    }

    #[test]
    fn test_custom_frame_duration() {
        let channel = IntentChannel::<4>::new();
        let renderer = Renderer::new(channel.receiver(), &config());
        let mut scheduler = FrameScheduler::with_frame_duration(
            renderer,
            RecordingDriver::default(),
            FixedClock(UNIX_TIME),
            Duration::from_millis(40),
        );
        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(40));
        assert_eq!(result.next_deadline, Instant::from_millis(80));
    }

    #[test]
    fn test_driver_errors_are_counted() {
        let channel = IntentChannel::<4>::new();
        let renderer = Renderer::new(channel.receiver(), &config());
        let driver = RecordingDriver {
            fail: true,
            ..RecordingDriver::default()
        };
        let mut scheduler = FrameScheduler::new(renderer, driver, FixedClock(UNIX_TIME));

        for frame in 0..3 {
            let result = scheduler.tick(Instant::from_millis(frame * 100));
            assert!(!result.written);
        }
        assert_eq!(scheduler.write_errors(), 3);

        scheduler.output_mut().fail = false;
        assert!(scheduler.tick(Instant::from_millis(300)).written);
        assert_eq!(scheduler.write_errors(), 3);
    }

    #[test]
    fn test_wall_clock_reaches_effects() {
        let channel = IntentChannel::<4>::new();
        let renderer = Renderer::new(channel.receiver(), &config());
        let mut scheduler =
            FrameScheduler::new(renderer, RecordingDriver::default(), FixedClock(50_000));

        scheduler.tick(Instant::from_millis(0));
        assert!(scheduler.output_mut().frames[0].is_blank());
    }
}
