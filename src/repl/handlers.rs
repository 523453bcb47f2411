//! Handlers Module
//!
//! Session state for the interactive loop and one handler per command.
//! Handlers return the text to print; only the catch announce line prints
//! early, ahead of its suspense pause. The cache protocol is the same for
//! every paged view: try the key, render from the stored payload on a hit,
//! otherwise fetch, render and store.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::api::PokeApiClient;
use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::pokedex::{attempt_catch, Pokedex};
use crate::repl::Command;

/// Usage text for the `help` command.
const HELP_TEXT: &str = "\nHow to use the Pokedex:\n\n\
    help:      Displays a help message\n\
    map:       Display 20 location areas\n\
    mapb:      Display previous 20 location areas\n\
    explore:   explore <location-area> lists pokemon in the area\n\
    catch:     Try to catch a pokemon and add it to the pokedex\n\
    inspect:   Display information about caught pokemon\n\
    pokedex:   Display all caught pokemon\n\
    cache:     Display cache statistics\n\
    exit:      Exit the Pokedex\n\n";

/// Where pagination currently stands: the link tokens of the page on screen.
#[derive(Debug, Default)]
struct PageCursor {
    /// False until the first page has been shown
    started: bool,
    next: Option<String>,
    previous: Option<String>,
}

impl PageCursor {
    /// Adopts the link tokens of whichever source served the page, mapping
    /// the cache's empty-string convention back to `None`.
    fn update(&mut self, next: String, previous: String) {
        self.started = true;
        self.next = (!next.is_empty()).then_some(next);
        self.previous = (!previous.is_empty()).then_some(previous);
    }
}

/// Everything the command handlers share across one session.
pub struct AppState {
    cache: TimedCache,
    client: PokeApiClient,
    pokedex: Pokedex,
    cursor: PageCursor,
    page_limit: u32,
    throw_delay: Duration,
}

impl AppState {
    /// Creates the session state around an existing cache and client.
    pub fn new(cache: TimedCache, client: PokeApiClient, config: &Config) -> Self {
        Self {
            cache,
            client,
            pokedex: Pokedex::new(),
            cursor: PageCursor::default(),
            page_limit: config.page_limit,
            throw_delay: config.throw_delay(),
        }
    }

    /// Dispatches one parsed command to its handler.
    pub async fn handle(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Help => Ok(HELP_TEXT.to_string()),
            // The loop exits before dispatching this
            Command::Exit => Ok(String::new()),
            Command::Map => self.handle_map().await,
            Command::MapBack => self.handle_map_back().await,
            Command::Explore(area) => self.handle_explore(&area).await,
            Command::Catch(name) => self.handle_catch(&name).await,
            Command::Inspect(name) => self.handle_inspect(&name),
            Command::Pokedex => self.handle_pokedex(),
            Command::Cache => self.handle_cache().await,
        }
    }

    // == Map Navigation ==

    /// `map`: the next page of location areas, or the first page when none
    /// has been shown yet.
    pub async fn handle_map(&mut self) -> Result<String> {
        let url = if !self.cursor.started {
            self.client.first_page_url(self.page_limit)
        } else {
            match &self.cursor.next {
                Some(url) => url.clone(),
                None => return Ok("There are no further locations\n".to_string()),
            }
        };

        self.show_page(&url).await
    }

    /// `mapb`: the previous page of location areas.
    pub async fn handle_map_back(&mut self) -> Result<String> {
        let url = match &self.cursor.previous {
            Some(url) => url.clone(),
            None => return Ok("There were no previous locations\n".to_string()),
        };

        self.show_page(&url).await
    }

    /// Serves one listing page from the cache or the network, adopting its
    /// link tokens as the new cursor either way.
    async fn show_page(&mut self, url: &str) -> Result<String> {
        if let Some(hit) = self.cache.get(url).await {
            debug!("Cache hit for {}", url);
            let text = String::from_utf8_lossy(&hit.payload).into_owned();
            self.cursor.update(hit.next, hit.previous);
            return Ok(format!("From cache: \n\n{}", text));
        }

        let page = self.client.fetch_location_page(url).await?;
        let rendered = page.render();
        self.cache
            .add(
                url,
                rendered.clone().into_bytes(),
                page.next_token(),
                page.previous_token(),
            )
            .await;
        self.cursor.update(page.next_token(), page.previous_token());

        Ok(rendered)
    }

    // == Explore ==

    /// `explore <area>`: the pokemon encountered in one location area.
    /// Detail pages have no pagination, so both link tokens are stored empty.
    pub async fn handle_explore(&mut self, area: &str) -> Result<String> {
        let url = self.client.location_area_url(area);

        if let Some(hit) = self.cache.get(&url).await {
            debug!("Cache hit for {}", url);
            let text = String::from_utf8_lossy(&hit.payload).into_owned();
            return Ok(format!("From cache: \n\n{}", text));
        }

        let detail = self.client.fetch_location_detail(area).await?;
        let rendered = detail.render();
        self.cache
            .add(url, rendered.clone().into_bytes(), "", "")
            .await;

        Ok(format!("Exploring {}...\n{}", area, rendered))
    }

    // == Catch / Inspect / Pokedex ==

    /// `catch <name>`: fetch the record if it is new, then roll for it.
    ///
    /// The announce line prints before the suspense pause so the pause reads
    /// as the throw.
    pub async fn handle_catch(&mut self, name: &str) -> Result<String> {
        if self.pokedex.is_caught(name) {
            return Ok(format!("{} has already been caught\n", name));
        }

        if !self.pokedex.contains(name) {
            let pokemon = match self.client.fetch_pokemon(name).await {
                Ok(pokemon) => pokemon,
                Err(PokedexError::UnexpectedStatus { status, .. })
                    if status == StatusCode::NOT_FOUND =>
                {
                    return Ok(format!("No pokemon named {}\n", name));
                }
                Err(err) => return Err(err),
            };
            self.pokedex.record(pokemon);
        }

        println!("Throwing a Pokeball at {}...", name);
        tokio::time::sleep(self.throw_delay).await;

        let difficulty = match self.pokedex.get(name) {
            Some(entry) => entry.pokemon.catch_difficulty(),
            None => return Ok(format!("No pokemon named {}\n", name)),
        };

        if attempt_catch(difficulty) {
            self.pokedex.mark_caught(name);
            Ok(format!("{} was caught!\n", name))
        } else {
            Ok(format!("{} escaped!\n", name))
        }
    }

    /// `inspect <name>`: the stored record of a caught pokemon.
    pub fn handle_inspect(&self, name: &str) -> Result<String> {
        match self.pokedex.get(name) {
            Some(entry) if entry.caught => Ok(entry.render_inspect()),
            _ => Ok(format!("{} has not been caught yet!\n", name)),
        }
    }

    /// `pokedex`: every caught pokemon, one line each.
    pub fn handle_pokedex(&self) -> Result<String> {
        let mut out = String::from("The Pokedex:\n");
        for name in self.pokedex.caught_names() {
            out.push_str(&format!("\t- {}\n", name));
        }
        Ok(out)
    }

    /// `cache`: the response cache's counters.
    pub async fn handle_cache(&self) -> Result<String> {
        let stats = self.cache.stats().await;
        Ok(format!(
            "Cache statistics:\n  entries: {}\n  hits: {}\n  misses: {}\n  swept: {}\n  hit rate: {:.1}%\n",
            stats.entries,
            stats.hits,
            stats.misses,
            stats.swept,
            stats.hit_rate() * 100.0
        ))
    }

    /// Stops the cache's background sweeper; called once on the way out.
    pub async fn shutdown(&self) {
        debug!(
            "Shutting down with {} cached entries",
            self.cache.len().await
        );
        self.cache.shutdown();
    }
}
