use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::info;

use super::App;
use super::actions::Exit;
use crate::navigation::SearchOutcome;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user quits or navigates away.
	///
	/// Returns the navigation outcome when a row was followed with the exit
	/// policy, `None` when the user quit.
	pub fn run(&mut self) -> Result<Option<SearchOutcome>> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(io::stdout(), EnableMouseCapture).and_then(|()| terminal.clear()) {
			ratatui::restore();
			return Err(err.into());
		}

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<Option<Exit>> = 'event_loop: loop {
			self.pump_search_results();
			self.throbber_state.calc_next();

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut exit = None;
			while let Some(event) = pending_events.pop_front() {
				let handled = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						self.handle_key(key, Instant::now())
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => Ok(None),
				};
				match handled {
					Ok(Some(reason)) => {
						exit = Some(reason);
						break;
					}
					Ok(None) => {}
					Err(err) => break 'event_loop Err(err),
				}
			}
			if exit.is_some() {
				break Ok(exit);
			}

			self.tick(Instant::now());
			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break 'event_loop Err(err.into());
			}

			thread::sleep(FRAME_INTERVAL);
		};

		let _ = execute!(io::stdout(), DisableMouseCapture);
		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		match result? {
			Some(Exit::Navigated(outcome)) => {
				info!(url = %outcome.url, "leaving with selected result");
				Ok(Some(outcome))
			}
			Some(Exit::Quit) | None => Ok(None),
		}
	}
}
