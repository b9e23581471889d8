use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, NaiveDateTime, Timelike};
use gloo_timers::callback::Interval;
use web_sys::js_sys;
use yew::prelude::*;

use super::engine::{Clock, CountdownEngine, CountdownValue, TargetInstant, TickOutcome};
use crate::config;

/// Wall clock of the hosting browser.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> Option<i64> {
        let now = js_sys::Date::now();
        now.is_finite().then(|| now as i64)
    }
}

/// Resolves a local wall-clock time with the browser's own time zone rules,
/// so daylight saving at the target date is honoured.
pub fn browser_target(local: NaiveDateTime) -> TargetInstant {
    let date = js_sys::Date::new_with_year_month_day_hr_min_sec(
        local.year() as u32,
        local.month0() as i32,
        local.day() as i32,
        local.hour() as i32,
        local.minute() as i32,
        local.second() as i32,
    );
    let ms = date.get_time();
    if ms.is_finite() {
        TargetInstant::from_epoch_ms(ms as i64)
    } else {
        log::warn!("Browser could not resolve {}, treating it as UTC", local);
        TargetInstant::from_local(local, 0)
    }
}

/// Runs a countdown for as long as the calling component is mounted.
///
/// Ticks once immediately, then every [`config::TICK_MS`]. The interval is
/// dropped when the target is reached or when the component unmounts.
#[hook]
pub fn use_countdown(target: TargetInstant) -> CountdownValue {
    // seeded from the clock so the first paint is not all zeros
    let value = use_state(|| CountdownEngine::new(target, BrowserClock).first_value());

    {
        let value = value.clone();
        use_effect_with_deps(
            move |target| {
                let engine = Rc::new(RefCell::new(CountdownEngine::new(*target, BrowserClock)));
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                let run_tick = {
                    let interval_handle = interval_handle.clone();
                    move || {
                        let outcome = engine.borrow_mut().tick();
                        match outcome {
                            TickOutcome::Published(next) => value.set(next),
                            TickOutcome::Stale => {
                                log::debug!("Clock unavailable, keeping previous countdown")
                            }
                            TickOutcome::Finished => value.set(CountdownValue::ZERO),
                        }
                        let keep = outcome.keeps_ticking();
                        if !keep {
                            if let Some(interval) = interval_handle.borrow_mut().take() {
                                log::info!("Countdown reached its target, stopping");
                                drop(interval);
                            }
                        }
                        keep
                    }
                };

                // first value without waiting a full tick
                if run_tick() {
                    let interval = Interval::new(config::TICK_MS, move || {
                        run_tick();
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            target,
        );
    }

    *value
}
