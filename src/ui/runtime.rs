use std::collections::VecDeque;
use std::io::stdout;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::App;
use super::actions::Flow;
use super::outcome::SessionOutcome;

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user leaves.
	pub fn run(&mut self) -> Result<SessionOutcome> {
		let mut terminal = ratatui::init();
		guarded(
			&mut terminal,
			|terminal| {
				terminal.clear()?;
				execute!(stdout(), EnableMouseCapture)?;
				Ok(())
			},
			|terminal| {
				let input = InputPump::spawn();
				let result = self.event_loop(terminal, &input.events);
				let stopped = input.stop();
				result.and(stopped)
			},
			|_| {
				let disabled = execute!(stdout(), DisableMouseCapture);
				ratatui::restore();
				disabled.map_err(Into::into)
			},
		)?;
		Ok(self.outcome())
	}

	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		events: &Receiver<Event>,
	) -> Result<()> {
		let mut pending_events = VecDeque::new();

		loop {
			loop {
				match events.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut flow = Flow::Continue;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						flow = self.handle_key(key);
						if flow == Flow::Exit {
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if flow == Flow::Exit {
				return Ok(());
			}

			self.pump_dataset();
			self.throbber_state.calc_next();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		}
	}
}

/// Input thread forwarding crossterm events to the UI thread.
struct InputPump {
	events: Receiver<Event>,
	running: Arc<AtomicBool>,
	handle: JoinHandle<Result<()>>,
}

impl InputPump {
	fn spawn() -> Self {
		let (event_tx, events) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);

		let handle = thread::spawn(move || -> Result<()> {
			while flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		Self {
			events,
			running,
			handle,
		}
	}

	fn stop(self) -> Result<()> {
		self.running.store(false, Ordering::Relaxed);
		match self.handle.join() {
			Ok(result) => result,
			Err(err) => std::panic::resume_unwind(err),
		}
	}
}

/// Run `body` between `setup` and `teardown`.
///
/// `teardown` runs whenever `setup` was attempted, including when `setup` or
/// `body` fail. The first error wins: setup, then body, then teardown.
fn guarded<S, T>(
	state: &mut S,
	setup: impl FnOnce(&mut S) -> Result<()>,
	body: impl FnOnce(&mut S) -> Result<T>,
	teardown: impl FnOnce(&mut S) -> Result<()>,
) -> Result<T> {
	if let Err(err) = setup(state) {
		let _ = teardown(state);
		return Err(err);
	}
	let result = body(state);
	let cleaned = teardown(state);
	let value = result?;
	cleaned?;
	Ok(value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn teardown_runs_when_setup_fails() {
		let mut steps: Vec<&str> = Vec::new();
		let result: Result<()> = guarded(
			&mut steps,
			|steps| {
				steps.push("setup");
				Err(anyhow!("clear failed"))
			},
			|steps| {
				steps.push("body");
				Ok(())
			},
			|steps| {
				steps.push("teardown");
				Ok(())
			},
		);

		assert_eq!(result.unwrap_err().to_string(), "clear failed");
		assert_eq!(steps, ["setup", "teardown"]);
	}

	#[test]
	fn body_error_wins_over_teardown_error() {
		let mut steps: Vec<&str> = Vec::new();
		let result: Result<()> = guarded(
			&mut steps,
			|_| Ok(()),
			|steps| {
				steps.push("body");
				Err(anyhow!("draw failed"))
			},
			|steps| {
				steps.push("teardown");
				Err(anyhow!("disable failed"))
			},
		);

		assert_eq!(result.unwrap_err().to_string(), "draw failed");
		assert_eq!(steps, ["body", "teardown"]);
	}

	#[test]
	fn teardown_error_surfaces_after_clean_body() {
		let mut steps: Vec<&str> = Vec::new();
		let result = guarded(
			&mut steps,
			|_| Ok(()),
			|_| Ok(7),
			|steps| {
				steps.push("teardown");
				Err(anyhow!("disable failed"))
			},
		);

		assert_eq!(result.unwrap_err().to_string(), "disable failed");
		assert_eq!(steps, ["teardown"]);
	}
}
