// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::Result;
use application::{NoteQueryService, NoteRepository};
use domain::DomainError;
use infrastructure::{Config, NoteClient, PageRenderer};
use ports::HtmlPresenter;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};
use crate::util::text::truncate_chars;

const SUMMARY_WIDTH: usize = 72;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting noteview with arguments");

    // Resolve the API address once; the client never looks at the mode again
    let mut config = Config::discover(args.config.as_deref())?;
    if let Some(api_url) = args.api_url {
        config.api.base_url = Some(api_url);
    }
    let base_url = config.api.resolve_base_url(args.mode)?;
    info!(%base_url, mode = ?args.mode, "Using notes API");

    let service = NoteQueryService::new(NoteClient::new(&base_url));
    let presenter = if args.strip_frontmatter {
        HtmlPresenter::with_frontmatter_stripped()
    } else {
        HtmlPresenter::new()
    };

    match args.command {
        Command::List { tag, open } => {
            let notes = match &tag {
                Some(tag) => service.get_notes_by_tag(tag).await,
                None => service.get_notes().await,
            };
            if open {
                let heading = match &tag {
                    Some(tag) => format!("Notes tagged \"{tag}\""),
                    None => "All notes".to_string(),
                };
                let html = presenter.render_index(&heading, &notes);
                open_page("index.html", &html).await?;
            } else {
                for note in &notes {
                    println!("{}\t{}", note.id, list_line(&presenter, note));
                }
            }
        }
        Command::Tags => {
            for tag in service.get_all_tags().await {
                println!("{tag}");
            }
        }
        Command::Search { query } => {
            for note in service.search_notes(&query).await {
                println!("{}\t{}", note.id, list_line(&presenter, &note));
            }
        }
        Command::View { note_id, json, html } => {
            view_note(&service, &presenter, &note_id, json, html).await?;
        }
    }

    Ok(())
}

async fn view_note<R: NoteRepository>(
    service: &NoteQueryService<R>,
    presenter: &HtmlPresenter,
    note_id: &str,
    json: bool,
    html: bool,
) -> Result<()> {
    info!(note_id, "Viewing note");
    let note = service
        .get_note(note_id)
        .await
        .ok_or_else(|| DomainError::NoteNotFound(note_id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
        return Ok(());
    }

    let page = presenter.render(&note);
    if html {
        println!("{page}");
    } else {
        open_page("note.html", &page).await?;
    }
    Ok(())
}

async fn open_page(file_name: &str, html: &str) -> Result<()> {
    let mut renderer = PageRenderer::new();
    let path = renderer.create_temp_file(file_name, html)?;
    renderer.open_in_browser(&path).await
}

fn list_line(presenter: &HtmlPresenter, note: &domain::Note) -> String {
    match &note.metadata.title {
        Some(title) => title.clone(),
        None => truncate_chars(&presenter.summary(note), SUMMARY_WIDTH),
    }
}
