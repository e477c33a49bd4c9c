//! Tick Simulator - drives a recipe timer from a simulated tick source
//!
//! Simulates:
//! - A tick source firing at a nominal interval
//! - A source running fast or slow, plus random spread per tick
//! - Pauses where the owner stops the timer mid-run

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recipe_core::{Seconds, TimerResult};
use recipe_timer::RecipeTimer;

/// Shape of the deltas a tick source hands to the timer
///
/// The model is stateless. How far delivered time wanders from nominal time
/// is measured against the timer in [`SimulationResult::drift`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSourceModel {
    /// Multiplier on the nominal interval (1.0 = exact). Must not be negative.
    pub rate: f64,
    /// Largest random offset added to or taken from a single delta
    pub spread: Duration,
}

impl TickSourceModel {
    pub fn new(rate: f64, spread: Duration) -> Self {
        TickSourceModel { rate, spread }
    }

    /// Every tick delivers exactly the nominal interval
    pub fn exact() -> Self {
        Self::new(1.0, Duration::ZERO)
    }

    pub fn fast() -> Self {
        Self::new(1.001, Duration::from_micros(200))
    }

    pub fn slow() -> Self {
        Self::new(0.999, Duration::from_micros(200))
    }

    /// Busy UI thread: ticks arrive late and unevenly
    pub fn busy_ui() -> Self {
        Self::new(1.0, Duration::from_millis(50))
    }

    /// Delta reported for one tick whose nominal length is `nominal`
    ///
    /// The nominal length is scaled by `rate` at nanosecond precision, then
    /// moved by up to `spread` in either direction. A delta never goes
    /// below zero, so the result is always a legal strict-mode tick.
    pub fn next_delta(&self, nominal: Duration, rng: &mut StdRng) -> Duration {
        let scaled_ns = (nominal.as_nanos() as f64 * self.rate).round() as u64;
        let scaled = Duration::from_nanos(scaled_ns);
        if self.spread.is_zero() {
            return scaled;
        }

        let offset = Duration::from_nanos(rng.gen_range(0..=self.spread.as_nanos() as u64));
        if rng.gen_bool(0.5) {
            scaled + offset
        } else {
            scaled.saturating_sub(offset)
        }
    }
}

/// Drives one timer with ticks from a modelled source
pub struct TickSimulator {
    timer: RecipeTimer,
    source: TickSourceModel,
    rng: StdRng,
    /// Nominal interval between ticks
    tick_interval: Duration,
    /// Nominal time covered so far
    wall_time: Duration,
    tick_count: u64,
}

impl TickSimulator {
    pub fn new(
        timer: RecipeTimer,
        tick_interval: Duration,
        source: TickSourceModel,
        seed: u64,
    ) -> Self {
        TickSimulator {
            timer,
            source,
            rng: StdRng::seed_from_u64(seed),
            tick_interval,
            wall_time: Duration::ZERO,
            tick_count: 0,
        }
    }

    /// Deliver one tick to the timer
    pub fn tick(&mut self, result: &mut SimulationResult) -> TimerResult<()> {
        let delta = self.source.next_delta(self.tick_interval, &mut self.rng);
        self.wall_time += self.tick_interval;
        self.tick_count += 1;

        self.timer.tick(delta)?;
        result.record_tick(self.tick_count, self.tick_interval, delta, &self.timer);
        Ok(())
    }

    /// Tick for a span of nominal time
    pub fn run(&mut self, duration: Duration) -> TimerResult<SimulationResult> {
        let mut result = SimulationResult::starting_at(self.timer.elapsed());
        let interval_us = self.tick_interval.as_micros().max(1);
        let ticks = (duration.as_micros() / interval_us) as u64;

        for _ in 0..ticks {
            self.tick(&mut result)?;
        }

        self.finish_run(&mut result);
        Ok(result)
    }

    /// Tick until the timer finishes or `max_ticks` have been delivered
    pub fn run_until_finished(&mut self, max_ticks: u64) -> TimerResult<SimulationResult> {
        let mut result = SimulationResult::starting_at(self.timer.elapsed());

        while !self.timer.is_finished() && result.total_ticks < max_ticks {
            self.tick(&mut result)?;
        }

        if !self.timer.is_finished() {
            tracing::warn!(max_ticks, elapsed = %self.timer.elapsed(), "timer unfinished at tick limit");
        }

        self.finish_run(&mut result);
        Ok(result)
    }

    fn finish_run(&self, result: &mut SimulationResult) {
        result.finalize(&self.timer);
        tracing::debug!(
            ticks = result.total_ticks,
            applied = result.applied_ticks,
            fed = %result.fed,
            drift = %result.drift(),
            elapsed = %result.final_elapsed,
            finished_at = ?result.finished_at_tick,
            "simulation run complete"
        );
    }

    pub fn timer(&self) -> &RecipeTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut RecipeTimer {
        &mut self.timer
    }

    pub fn wall_time(&self) -> Duration {
        self.wall_time
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn source(&self) -> &TickSourceModel {
        &self.source
    }
}

/// Simulation result and statistics
#[derive(Debug, Default)]
pub struct SimulationResult {
    /// Ticks delivered
    pub total_ticks: u64,
    /// Ticks delivered while the timer was running
    pub applied_ticks: u64,
    /// Time delivered while the timer was running
    pub fed: Seconds,
    /// Nominal time covered while the timer was running
    pub nominal: Seconds,
    /// Largest single delta delivered
    pub max_delta: Duration,
    /// Tick number (global to the simulator) at which the timer first read finished
    pub finished_at_tick: Option<u64>,
    /// Elapsed time when the run started
    pub start_elapsed: Seconds,
    /// Elapsed time when the run ended
    pub final_elapsed: Seconds,
    /// Mean delta delivered (milliseconds)
    pub avg_delta_ms: f64,
    delta_samples: Vec<Duration>,
}

impl SimulationResult {
    pub fn new() -> Self {
        SimulationResult::default()
    }

    pub fn starting_at(elapsed: Seconds) -> Self {
        SimulationResult {
            start_elapsed: elapsed,
            ..SimulationResult::default()
        }
    }

    fn record_tick(&mut self, tick: u64, nominal: Duration, delta: Duration, timer: &RecipeTimer) {
        self.total_ticks += 1;
        self.max_delta = self.max_delta.max(delta);
        self.delta_samples.push(delta);

        if timer.is_running() {
            self.applied_ticks += 1;
            self.fed += Seconds::from(delta);
            self.nominal += Seconds::from(nominal);
        }

        if self.finished_at_tick.is_none() && timer.is_finished() {
            self.finished_at_tick = Some(tick);
        }
    }

    fn finalize(&mut self, timer: &RecipeTimer) {
        self.final_elapsed = timer.elapsed();

        if !self.delta_samples.is_empty() {
            let sum: Duration = self.delta_samples.iter().sum();
            self.avg_delta_ms = sum.as_secs_f64() * 1000.0 / self.delta_samples.len() as f64;
        }
    }

    /// Delivered minus nominal time while running; negative for a slow source
    pub fn drift(&self) -> Seconds {
        self.fed - self.nominal
    }

    /// Time delivered but discarded by clamping
    ///
    /// Only meaningful for runs without a reset in the middle.
    pub fn clamped(&self) -> Seconds {
        self.fed
            .saturating_sub(self.final_elapsed.saturating_sub(self.start_elapsed))
    }
}

/// Predefined simulation scenarios
pub mod scenarios {
    use super::*;

    /// Ten-minute bake, started, ticked every 100ms by an exact source
    pub fn steady_bake(seed: u64) -> TickSimulator {
        let mut timer = RecipeTimer::new(Seconds::from_mins(10.0));
        timer.start();
        TickSimulator::new(
            timer,
            Duration::from_millis(100),
            TickSourceModel::exact(),
            seed,
        )
    }

    /// Three-minute egg, started, ticked by a fast source
    pub fn drifting_egg(seed: u64) -> TickSimulator {
        let mut timer = RecipeTimer::new(Seconds::from_mins(3.0));
        timer.start();
        TickSimulator::new(
            timer,
            Duration::from_millis(50),
            TickSourceModel::fast(),
            seed,
        )
    }

    /// Forty-second sear, started, ticked once per second by a busy UI loop
    pub fn laggy_ui_sear(seed: u64) -> TickSimulator {
        let mut timer = RecipeTimer::new(40.0);
        timer.start();
        TickSimulator::new(
            timer,
            Duration::from_secs(1),
            TickSourceModel::busy_ui(),
            seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_tracing;

    #[test]
    fn test_exact_source_delivers_nominal_interval() {
        let source = TickSourceModel::exact();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(
                source.next_delta(Duration::from_millis(100), &mut rng),
                Duration::from_millis(100)
            );
        }
    }

    #[test]
    fn test_spread_stays_within_bounds() {
        let source = TickSourceModel::new(1.0, Duration::from_millis(30));
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1_000 {
            let delta = source.next_delta(Duration::from_millis(20), &mut rng);
            assert!(delta <= Duration::from_millis(50));
        }
    }

    #[test]
    fn test_fast_source_shows_as_drift_against_timer() {
        let mut timer = RecipeTimer::new(1_000.0);
        timer.start();
        let mut sim = TickSimulator::new(
            timer,
            Duration::from_millis(100),
            TickSourceModel::new(1.01, Duration::ZERO),
            7,
        );

        let result = sim.run(Duration::from_secs(10)).unwrap();

        // 1% of 10s
        assert!((result.drift().as_f64() - 0.1).abs() < 1e-9);
        assert!((sim.timer().elapsed().as_f64() - 10.1).abs() < 1e-9);
        assert_eq!(result.clamped(), Seconds::ZERO);
    }

    #[test]
    fn test_stopped_time_is_not_drift() {
        let timer = RecipeTimer::new(30.0);
        let mut sim = TickSimulator::new(
            timer,
            Duration::from_millis(100),
            TickSourceModel::slow(),
            3,
        );

        let result = sim.run(Duration::from_secs(5)).unwrap();

        assert_eq!(result.nominal, Seconds::ZERO);
        assert_eq!(result.drift(), Seconds::ZERO);
    }

    #[test]
    fn test_steady_bake_finishes_on_schedule() {
        init_tracing();
        let mut sim = scenarios::steady_bake(1);

        let result = sim.run_until_finished(10_000).unwrap();

        let finished_at = result.finished_at_tick.unwrap();
        assert!((6_000..=6_001).contains(&finished_at));
        assert_eq!(result.final_elapsed, Seconds::new(600.0));
        // Finishing never stops the timer
        assert!(sim.timer().is_running());
    }

    #[test]
    fn test_stopped_timer_ignores_simulated_ticks() {
        let timer = RecipeTimer::new(30.0);
        let mut sim = TickSimulator::new(
            timer,
            Duration::from_millis(100),
            TickSourceModel::exact(),
            3,
        );

        let result = sim.run(Duration::from_secs(5)).unwrap();

        assert_eq!(result.total_ticks, 50);
        assert_eq!(result.applied_ticks, 0);
        assert_eq!(result.final_elapsed, Seconds::ZERO);
        assert_eq!(sim.wall_time(), Duration::from_secs(5));
    }

    #[test]
    fn test_pause_excludes_time() {
        let mut sim = scenarios::steady_bake(2);

        sim.run(Duration::from_secs(2)).unwrap();
        sim.timer_mut().stop();
        sim.run(Duration::from_secs(5)).unwrap();
        sim.timer_mut().start();
        let last = sim.run(Duration::from_secs(1)).unwrap();

        let elapsed = sim.timer().elapsed().as_f64();
        assert!((elapsed - 3.0).abs() < 1e-6);
        assert_eq!(sim.tick_count(), 80);
        assert!(last.clamped().as_f64() < 1e-6);
    }

    #[test]
    fn test_laggy_source_never_overshoots() {
        init_tracing();
        let mut sim = scenarios::laggy_ui_sear(42);

        let result = sim.run(Duration::from_secs(60)).unwrap();

        assert!(sim.timer().elapsed() <= sim.timer().duration());
        assert!(sim.timer().is_finished());
        assert!(result.clamped() > Seconds::new(15.0));
        assert!(result.max_delta <= Duration::from_millis(1050));
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = scenarios::drifting_egg(99);
        let mut b = scenarios::drifting_egg(99);

        let ra = a.run(Duration::from_secs(30)).unwrap();
        let rb = b.run(Duration::from_secs(30)).unwrap();

        assert_eq!(ra.final_elapsed, rb.final_elapsed);
        assert_eq!(ra.max_delta, rb.max_delta);
        assert_eq!(ra.drift(), rb.drift());
        assert_eq!(a.source(), b.source());
    }

    #[test]
    fn test_reset_mid_simulation() {
        let mut sim = scenarios::drifting_egg(5);

        sim.run(Duration::from_secs(10)).unwrap();
        assert!(sim.timer().elapsed() > Seconds::ZERO);

        sim.timer_mut().reset();
        let result = sim.run(Duration::from_secs(1)).unwrap();

        assert_eq!(result.applied_ticks, 0);
        assert_eq!(result.final_elapsed, Seconds::ZERO);
    }
}
