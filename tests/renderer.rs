mod tests {
    use myrtio_matrix_composer::effect::EffectSlot;
    use myrtio_matrix_composer::effect::clock::draw_time;
    use myrtio_matrix_composer::{
        DisplayTime, EffectId, FrameBuffer, HourFormat, Instant, IntentChannel,
        MatrixEngineConfig, MatrixIntent, Renderer, TimeZone,
    };

    // 2024-05-01 14:07:00 UTC
    const UNIX_TIME: i64 = 1_714_572_420;

    fn config(effect: EffectId) -> MatrixEngineConfig {
        MatrixEngineConfig {
            effect,
            ..MatrixEngineConfig::default()
        }
    }

    fn clock_frame(hour: u8, minute: u8) -> FrameBuffer {
        let mut frame = FrameBuffer::default();
        draw_time(&mut frame, DisplayTime { hour, minute });
        frame
    }

    #[test]
    fn test_renders_configured_effect() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::new(channel.receiver(), &MatrixEngineConfig::default());
        assert_eq!(renderer.state().effect(), EffectId::Snake);

        let frame = renderer.render(Instant::from_millis(0), UNIX_TIME);
        assert_eq!(frame.lit_count(), 8);
    }

    #[test]
    fn test_switch_effect_intent() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::new(channel.receiver(), &config(EffectId::Snake));
        renderer.render(Instant::from_millis(0), UNIX_TIME);

        channel
            .try_send(MatrixIntent::SwitchEffect(EffectId::Lines))
            .unwrap();
        let frame = renderer.render(Instant::from_millis(100), UNIX_TIME);
        assert_eq!(frame.lit_count(), 64);
        assert_eq!(renderer.state().effect(), EffectId::Lines);
    }

    #[test]
    fn test_next_effect_accumulates_and_wraps() {
        let channel = IntentChannel::<4>::new();
        let sender = channel.sender();
        let mut renderer = Renderer::new(channel.receiver(), &config(EffectId::Snake));

        sender.try_send(MatrixIntent::NextEffect).unwrap();
        sender.try_send(MatrixIntent::NextEffect).unwrap();
        renderer.render(Instant::from_millis(0), UNIX_TIME);
        assert_eq!(renderer.state().effect(), EffectId::Rain);

        sender
            .try_send(MatrixIntent::SwitchEffect(EffectId::SandClock))
            .unwrap();
        sender.try_send(MatrixIntent::NextEffect).unwrap();
        renderer.render(Instant::from_millis(100), UNIX_TIME);
        assert_eq!(renderer.state().effect(), EffectId::Snake);
    }

    #[test]
    fn test_display_power() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::new(channel.receiver(), &config(EffectId::Lines));

        channel
            .try_send(MatrixIntent::SetDisplayPower(false))
            .unwrap();
        assert!(renderer.render(Instant::from_millis(0), UNIX_TIME).is_blank());
        assert!(!renderer.state().powered());

        channel
            .try_send(MatrixIntent::SetDisplayPower(true))
            .unwrap();
        let frame = renderer.render(Instant::from_millis(100), UNIX_TIME);
        assert_eq!(frame.lit_count(), 64);
    }

    #[test]
    fn test_clock_settings_intents() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::new(channel.receiver(), &config(EffectId::Clock));
        assert_eq!(
            renderer.render(Instant::from_millis(0), UNIX_TIME),
            &clock_frame(14, 7)
        );

        channel
            .try_send(MatrixIntent::SetHourFormat(HourFormat::H12))
            .unwrap();
        assert_eq!(
            renderer.render(Instant::from_millis(100), UNIX_TIME),
            &clock_frame(2, 7)
        );

        channel
            .try_send(MatrixIntent::SetTimeZone(TimeZone::Fixed(3600)))
            .unwrap();
        assert_eq!(
            renderer.render(Instant::from_millis(200), UNIX_TIME),
            &clock_frame(3, 7)
        );
        assert_eq!(renderer.state().clock().hour_format, HourFormat::H12);
    }

    #[test]
    fn test_sand_toggle_survives_effect_switch() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::new(channel.receiver(), &config(EffectId::Snake));

        channel
            .try_send(MatrixIntent::SetSandEnabled(false))
            .unwrap();
        channel
            .try_send(MatrixIntent::SwitchEffect(EffectId::SandClock))
            .unwrap();
        renderer.render(Instant::from_millis(0), UNIX_TIME);

        assert!(!renderer.state().sand_enabled());
        let EffectSlot::SandClock(effect) = renderer.state().current_effect() else {
            panic!("expected the sand clock");
        };
        assert!(!effect.sand_enabled());
    }

    #[test]
    fn test_reseed_restarts_effect() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::new(channel.receiver(), &config(EffectId::Snake));
        let first = renderer.render(Instant::from_millis(0), UNIX_TIME).clone();
        renderer.render(Instant::from_millis(100), UNIX_TIME);

        channel.try_send(MatrixIntent::Reseed).unwrap();
        let frame = renderer.render(Instant::from_millis(200), UNIX_TIME);
        assert_eq!(frame, &first);
    }
}
