use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;
use tokio::sync::mpsc;

use crate::breeds::BreedList;
use crate::config::AppConfig;
use crate::content::CAT_IMAGES;
use crate::facts::{FactClient, FactError};
use crate::theme::Theme;

/// How long a status line message stays visible
const STATUS_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    About,
    Breeds,
    Care,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::About, Tab::Breeds, Tab::Care];

    pub fn title(self) -> &'static str {
        match self {
            Tab::About => "About Cats",
            Tab::Breeds => "Cat Breeds",
            Tab::Care => "Cat Care",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::About => 0,
            Tab::Breeds => 1,
            Tab::Care => 2,
        }
    }

    fn next(self) -> Self {
        match self {
            Tab::About => Tab::Breeds,
            Tab::Breeds => Tab::Care,
            Tab::Care => Tab::About,
        }
    }

    fn prev(self) -> Self {
        match self {
            Tab::About => Tab::Care,
            Tab::Breeds => Tab::About,
            Tab::Care => Tab::Breeds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

/// Slide position over a fixed number of photos. Does not wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.index -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.index += 1;
        }
    }
}

type FactResult = Result<String, FactError>;

pub struct App {
    pub tab: Tab,
    pub popup: Popup,

    // Breeds tab
    pub breeds: BreedList,
    pub selected_breed: usize,

    // "Did You Know?" card
    pub fact: String,
    pub fetches_in_flight: usize,

    pub carousel: Carousel,
    pub theme: Theme,

    // Status message (shown in info line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,

    fact_client: FactClient,
    fact_tx: mpsc::UnboundedSender<FactResult>,
    fact_rx: mpsc::UnboundedReceiver<FactResult>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let fact_client = FactClient::new(config.fact_endpoint.clone(), config.request_timeout())?;
        let (fact_tx, fact_rx) = mpsc::unbounded_channel();

        Ok(Self {
            tab: Tab::About,
            popup: Popup::None,

            breeds: BreedList::seeded(),
            selected_breed: 0,

            fact: String::new(),
            fetches_in_flight: 0,

            carousel: Carousel::new(CAT_IMAGES.len()),
            theme: Theme::from_config(&config.theme),

            status_message: None,
            status_message_time: None,

            fact_client,
            fact_tx,
            fact_rx,
        })
    }

    /// First display: fetch a fact unless the config turns that off
    pub fn start(&mut self, config: &AppConfig) {
        if config.fetch_on_start {
            self.request_fact();
        } else {
            tracing::debug!("Skipping startup fact fetch");
        }
    }

    /// Set a status message (auto-clears after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.popup == Popup::Help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')) {
                self.popup = Popup::None;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),

            KeyCode::Left => self.carousel.prev(),
            KeyCode::Right => self.carousel.next(),

            KeyCode::Char('f') | KeyCode::Enter => self.request_fact(),

            // Breed list navigation and rating only apply on the breeds tab
            KeyCode::Char('j') | KeyCode::Down if self.tab == Tab::Breeds => {
                if self.selected_breed + 1 < self.breeds.len() {
                    self.selected_breed += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up if self.tab == Tab::Breeds => {
                self.selected_breed = self.selected_breed.saturating_sub(1);
            }
            KeyCode::Char(c @ '1'..='5') if self.tab == Tab::Breeds => {
                let stars = c as u8 - b'0';
                self.rate_selected(stars)?;
            }

            KeyCode::Char('?') => self.popup = Popup::Help,

            _ => {}
        }
        Ok(())
    }

    /// Rate the breed under the cursor
    fn rate_selected(&mut self, stars: u8) -> Result<()> {
        let breed = self.breeds.rate(self.selected_breed, stars)?;
        let msg = format!("Rated {} {}/5", breed.name, breed.rating);
        tracing::debug!("{}", msg);
        self.set_status(msg);
        Ok(())
    }

    /// Kick off a fact fetch in the background. The result is picked up on tick.
    pub fn request_fact(&mut self) {
        let client = self.fact_client.clone();
        let tx = self.fact_tx.clone();
        self.fetches_in_flight += 1;

        tokio::spawn(async move {
            let result = client.fetch().await;
            // Receiver only goes away on shutdown
            let _ = tx.send(result);
        });
    }

    /// Apply a finished fetch. Failures are logged and the previous fact stays up.
    pub fn apply_fact_result(&mut self, result: FactResult) {
        self.fetches_in_flight = self.fetches_in_flight.saturating_sub(1);

        match result {
            Ok(fact) => {
                tracing::info!("New cat fact ({} chars)", fact.chars().count());
                self.fact = fact;
            }
            Err(e) => {
                tracing::error!("Error fetching cat fact from {}: {}", self.fact_client.endpoint(), e);
            }
        }
    }

    pub fn tick(&mut self) {
        // Apply in arrival order so the newest response wins
        while let Ok(result) = self.fact_rx.try_recv() {
            self.apply_fact_result(result);
        }

        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= STATUS_TIMEOUT_SECS {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    #[cfg(test)]
    async fn wait_for_fact(&mut self) {
        if let Some(result) = self.fact_rx.recv().await {
            self.apply_fact_result(result);
        }
    }
}
