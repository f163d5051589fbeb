// Host-side tests for the frame driver, ambient audio and mood transitions,
// run against a fake scheduler and audio sink.

use hang_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct FakeScheduler {
    next: u32,
    requested: Vec<u32>,
    cancelled: Vec<u32>,
}

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> u32 {
        let handle = self.next;
        self.next += 1;
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}

#[derive(Clone, Debug, PartialEq)]
enum SinkCall {
    Pause,
    Load(String, bool, f64),
    Play,
}

#[derive(Default)]
struct FakeSink {
    calls: Vec<SinkCall>,
    refuse_play: bool,
}

impl AudioSink for FakeSink {
    fn pause(&mut self) {
        self.calls.push(SinkCall::Pause);
    }

    fn load(&mut self, src: &str, looping: bool, volume: f64) {
        self.calls.push(SinkCall::Load(src.to_string(), looping, volume));
    }

    fn play(&mut self) -> Result<(), BackdropError> {
        self.calls.push(SinkCall::Play);
        if self.refuse_play {
            Err(BackdropError::Playback("NotAllowedError".into()))
        } else {
            Ok(())
        }
    }
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn session(mood: Mood) -> AnimationState {
    AnimationState {
        viewport: viewport(),
        seed: 250.0,
        mood,
    }
}

fn mount(mood: Mood) -> Backdrop<FakeScheduler, FakeSink> {
    Backdrop::mount(
        FakeSink::default(),
        Ok((FakeScheduler::default(), viewport())),
        mood,
        250.0,
    )
}

fn scheduler(b: &Backdrop<FakeScheduler, FakeSink>) -> &FakeScheduler {
    b.driver().expect("animation enabled").scheduler()
}

#[test]
fn start_schedules_exactly_one_frame() {
    let mut driver = AnimationDriver::new(FakeScheduler::default());
    assert!(!driver.is_running());
    driver.start(session(Mood::Cubist));
    assert_eq!(driver.state(), DriverState::Running { pending: 0 });
    assert_eq!(driver.scheduler().requested, vec![0]);
}

#[test]
fn each_frame_paints_and_reschedules() {
    let mut driver = AnimationDriver::new(FakeScheduler::default());
    let mut painter = RecordingPainter::new();
    driver.start(session(Mood::PostImpressionist));
    for (n, t) in [16.0, 33.0, 50.0].into_iter().enumerate() {
        assert!(driver.on_frame(t, &mut painter));
        assert_eq!(driver.state(), DriverState::Running { pending: n as u32 + 1 });
    }
    assert_eq!(driver.frames_painted(), 3);
    assert_eq!(painter.frames_painted(), 3);
}

#[test]
fn stale_timestamps_are_not_painted() {
    let mut driver = AnimationDriver::new(FakeScheduler::default());
    let mut painter = RecordingPainter::new();
    driver.start(session(Mood::Cubist));
    assert!(driver.on_frame(100.0, &mut painter));
    assert!(!driver.on_frame(100.0, &mut painter));
    assert!(!driver.on_frame(90.0, &mut painter));
    assert!(driver.on_frame(116.0, &mut painter));
    assert_eq!(painter.frames_painted(), 2);
    assert!(driver.is_running());
}

#[test]
fn stop_cancels_pending_frame_and_ignores_late_callbacks() {
    let mut driver = AnimationDriver::new(FakeScheduler::default());
    let mut painter = RecordingPainter::new();
    driver.start(session(Mood::Zen));
    driver.on_frame(16.0, &mut painter);
    assert!(driver.stop());
    assert!(!driver.stop());
    assert_eq!(driver.scheduler().cancelled, vec![1]);

    let before = painter.ops().len();
    assert!(!driver.on_frame(33.0, &mut painter));
    assert_eq!(painter.ops().len(), before);
    assert_eq!(driver.scheduler().requested, vec![0, 1]);
}

#[test]
fn mount_starts_animation_and_track() {
    let b = mount(Mood::Cubist);
    assert!(b.is_mounted());
    assert_eq!(scheduler(&b).requested, vec![0]);
    assert_eq!(
        b.audio().sink().calls,
        vec![
            SinkCall::Load("/audio/cubist.mp3".into(), true, 0.3),
            SinkCall::Play
        ]
    );
    assert_eq!(b.audio().current(), Some(Mood::Cubist));
}

#[test]
fn mood_switch_cancels_once_and_restarts_once() {
    let mut b = mount(Mood::Cubist);
    let mut painter = RecordingPainter::new();
    b.on_frame(16.0, &mut painter);

    assert!(b.set_mood(Mood::Zen, 900.0));
    assert_eq!(scheduler(&b).cancelled, vec![1]);
    assert_eq!(scheduler(&b).requested, vec![0, 1, 2]);

    let session = b.driver().and_then(|d| d.session()).copied().expect("session");
    assert_eq!(session.mood, Mood::Zen);
    assert_eq!(session.seed, 900.0);
    assert_eq!(session.viewport, viewport());

    // the next frame is drawn from the zen profile
    painter.take_ops();
    assert!(b.on_frame(33.0, &mut painter));
    let circles = painter
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Circle { .. }))
        .count();
    assert_eq!(circles, 6);
}

#[test]
fn mood_switch_swaps_track_after_pausing_old_one() {
    let mut b = mount(Mood::Cubist);
    b.set_mood(Mood::PostImpressionist, 1.0);
    assert_eq!(
        b.audio().sink().calls[2..],
        [
            SinkCall::Pause,
            SinkCall::Load("/audio/post-impressionist.mp3".into(), true, 0.3),
            SinkCall::Play,
        ]
    );
}

#[test]
fn reselecting_current_mood_is_a_no_op() {
    let mut b = mount(Mood::Zen);
    assert!(!b.set_mood(Mood::Zen, 5.0));
    assert_eq!(scheduler(&b).requested, vec![0]);
    assert!(scheduler(&b).cancelled.is_empty());
    assert_eq!(b.audio().sink().calls.len(), 2);
}

#[test]
fn fallback_mood_is_silent() {
    let mut b = mount(Mood::Cubist);
    b.set_mood(Mood::from_id("unknown"), 3.0);
    assert_eq!(b.mood(), Mood::Fallback);
    assert_eq!(b.audio().sink().calls.last(), Some(&SinkCall::Pause));
    assert_eq!(b.audio().current(), Some(Mood::Fallback));
}

#[test]
fn refused_playback_is_swallowed() {
    let sink = FakeSink {
        refuse_play: true,
        ..FakeSink::default()
    };
    let b = Backdrop::mount(sink, Ok((FakeScheduler::default(), viewport())), Mood::Zen, 1.0);
    assert_eq!(b.audio().current(), Some(Mood::Zen));
    assert!(b.driver().map(|d| d.is_running()).unwrap_or(false));
}

#[test]
fn unmount_cancels_frame_and_pauses_audio_for_good() {
    let mut b = mount(Mood::Cubist);
    let mut painter = RecordingPainter::new();
    b.on_frame(16.0, &mut painter);
    b.unmount();

    assert!(!b.is_mounted());
    assert_eq!(scheduler(&b).cancelled, vec![1]);
    assert_eq!(b.audio().sink().calls.last(), Some(&SinkCall::Pause));

    let ops = painter.ops().len();
    let calls = b.audio().sink().calls.len();
    let requests = scheduler(&b).requested.len();
    assert!(!b.on_frame(33.0, &mut painter));
    assert!(!b.set_mood(Mood::Zen, 2.0));
    b.unmount();
    assert_eq!(painter.ops().len(), ops);
    assert_eq!(b.audio().sink().calls.len(), calls);
    assert_eq!(scheduler(&b).requested.len(), requests);
}

#[test]
fn missing_canvas_keeps_audio_running() {
    let mut b: Backdrop<FakeScheduler, FakeSink> = Backdrop::mount(
        FakeSink::default(),
        Err(BackdropError::MissingCanvas),
        Mood::Cubist,
        1.0,
    );
    let mut painter = RecordingPainter::new();
    assert!(b.driver().is_none());
    assert!(!b.on_frame(16.0, &mut painter));
    assert!(painter.ops().is_empty());
    assert!(b.set_mood(Mood::Zen, 2.0));
    assert_eq!(b.audio().sink().calls.last(), Some(&SinkCall::Play));
}

#[test]
fn missing_context_disables_only_the_animation() {
    let b: Backdrop<FakeScheduler, FakeSink> = Backdrop::mount(
        FakeSink::default(),
        Err(BackdropError::MissingContext),
        Mood::Zen,
        1.0,
    );
    assert!(b.driver().is_none());
    assert_eq!(b.audio().current(), Some(Mood::Zen));
    assert_eq!(BackdropError::MissingCanvas.to_string(), "canvas element not found");
}

#[test]
fn mood_switch_leaves_computed_result_alone() {
    let mut calc = Calculator::new(CalculatorInput::default());
    calc.calculate();
    let shown = calc.message();

    let mut b = mount(Mood::Cubist);
    b.set_mood(Mood::Zen, 4.0);
    b.set_mood(Mood::PostImpressionist, 5.0);
    assert_eq!(calc.message(), shown);
}

#[test]
fn seeds_fall_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let seed = draw_seed(&mut rng);
        assert!((0.0..1000.0).contains(&seed));
    }
}
