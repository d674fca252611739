use std::sync::Arc;

use anyhow::{Context, Result, bail};

use videoclub_app::controllers::{EntryFormController, ListController, ProfileController};
use videoclub_catalog::{CatalogEntry, SearchFilter};
use videoclub_client::{CatalogApi, CatalogClient, ClientConfig, HttpAuthApi};
use videoclub_core::EntryId;
use videoclub_session::{AccessGuard, FileCredentialStore, GuardState, SessionManager};

const USAGE: &str = "\
videoclub — catalog client

USAGE:
    videoclub <command> [options]

COMMANDS:
    login <username> <password>     authenticate and persist the session
    register <username> <email> <password>
    logout                          clear the persisted session
    list                            show the full catalog
    search [--title T] [--genre G] [--director D] [--year Y]
    show <id>                       show one entry
    add [--title T] [--genre G] [--director D] [--year Y]
        [--duration MIN] [--rating R] [--description D] [--poster URL]
    edit <id> [same options as add]
    delete <id> --yes               remove an entry (requires --yes)
    profile [--email E] [--password P --confirm P]

The service location comes from VIDEOCLUB_API_URL (default http://localhost:9090).
";

#[tokio::main]
async fn main() -> Result<()> {
    videoclub_app::logging::init();

    let config = ClientConfig::from_env();
    let store = Arc::new(FileCredentialStore::open_default().context("opening session store")?);
    let session = SessionManager::new(
        store.clone(),
        Arc::new(HttpAuthApi::new(config.clone())),
    );
    let guard = AccessGuard::new(store);
    let catalog: Arc<CatalogClient> = Arc::new(CatalogClient::new(config, session.clone()));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("");
    let rest = if args.is_empty() { &args[..] } else { &args[1..] };

    match command {
        "" => root(&guard, &session, catalog).await,
        "login" => login(&session, rest).await,
        "register" => register(&session, rest).await,
        "logout" => {
            session.logout();
            println!("Logged out.");
            Ok(())
        }
        "list" => {
            ensure_session(&guard)?;
            list(catalog, &session).await
        }
        "search" => {
            ensure_session(&guard)?;
            search(catalog, &session, rest).await
        }
        "show" => {
            ensure_session(&guard)?;
            show(catalog, rest).await
        }
        "add" => {
            ensure_session(&guard)?;
            add(catalog, rest).await
        }
        "edit" => {
            ensure_session(&guard)?;
            edit(catalog, rest).await
        }
        "delete" => {
            ensure_session(&guard)?;
            delete(catalog, &session, rest).await
        }
        "profile" => {
            ensure_session(&guard)?;
            profile(&session, rest).await
        }
        "help" | "--help" | "-h" => {
            print!("{USAGE}");
            Ok(())
        }
        other => bail!("unknown command '{other}'; run `videoclub help`"),
    }
}

/// No command: show the catalog when a session is resident, otherwise point
/// at the login entry.
async fn root(
    guard: &AccessGuard,
    session: &SessionManager,
    catalog: Arc<CatalogClient>,
) -> Result<()> {
    match guard.check() {
        GuardState::Authorized => list(catalog, session).await,
        _ => {
            println!("Not logged in. Run `videoclub login <username> <password>`.");
            Ok(())
        }
    }
}

fn ensure_session(guard: &AccessGuard) -> Result<()> {
    match guard.check() {
        GuardState::Authorized => Ok(()),
        _ => bail!("not logged in; run `videoclub login <username> <password>` first"),
    }
}

async fn login(session: &SessionManager, args: &[String]) -> Result<()> {
    let [username, password] = args else {
        bail!("usage: videoclub login <username> <password>");
    };
    let identity = session.login(username, password).await?;
    println!("Logged in as {} ({})", identity.username, identity.role);
    Ok(())
}

async fn register(session: &SessionManager, args: &[String]) -> Result<()> {
    let [username, email, password] = args else {
        bail!("usage: videoclub register <username> <email> <password>");
    };
    session.register(username, email, password).await?;
    println!("Account created. Log in with `videoclub login {username} <password>`.");
    Ok(())
}

async fn list(catalog: Arc<CatalogClient>, session: &SessionManager) -> Result<()> {
    let mut ctl = ListController::new(catalog, session.clone());
    ctl.load().await;
    if let Some(msg) = ctl.message() {
        bail!("{msg}");
    }
    render(ctl.entries());
    Ok(())
}

async fn search(
    catalog: Arc<CatalogClient>,
    session: &SessionManager,
    args: &[String],
) -> Result<()> {
    let filter = SearchFilter {
        title: flag(args, "--title"),
        genre: flag(args, "--genre"),
        director: flag(args, "--director"),
        year: flag(args, "--year")
            .map(|raw| raw.parse().context("--year must be a whole number"))
            .transpose()?,
    };

    let mut ctl = ListController::new(catalog, session.clone());
    ctl.search(filter).await;
    if let Some(msg) = ctl.message() {
        bail!("{msg}");
    }
    render(ctl.entries());
    Ok(())
}

async fn show(catalog: Arc<CatalogClient>, args: &[String]) -> Result<()> {
    let id = entry_id(args)?;
    let entry = catalog.get(id).await?;
    render_one(&entry);
    Ok(())
}

async fn add(catalog: Arc<CatalogClient>, args: &[String]) -> Result<()> {
    let mut form = EntryFormController::create(catalog);
    fill_form(&mut form, args);
    match form.submit().await {
        Some(entry) => {
            println!("Created \"{}\" (id {}).", entry.title, entry.id);
            Ok(())
        }
        None => bail!("{}", form.message().unwrap_or("Failed to save movie")),
    }
}

async fn edit(catalog: Arc<CatalogClient>, args: &[String]) -> Result<()> {
    let id = entry_id(args)?;
    let mut form = EntryFormController::edit(catalog, id);
    form.load().await;
    if let Some(msg) = form.message() {
        bail!("{msg}");
    }
    fill_form(&mut form, args);
    match form.submit().await {
        Some(entry) => {
            println!("Updated \"{}\" (id {}).", entry.title, entry.id);
            Ok(())
        }
        None => bail!("{}", form.message().unwrap_or("Failed to save movie")),
    }
}

async fn delete(
    catalog: Arc<CatalogClient>,
    session: &SessionManager,
    args: &[String],
) -> Result<()> {
    let id = entry_id(args)?;
    if !args.iter().any(|a| a == "--yes") {
        bail!("deleting is irreversible; pass --yes to confirm");
    }

    let mut ctl = ListController::new(catalog, session.clone());
    ctl.load().await;
    if let Some(msg) = ctl.message() {
        bail!("{msg}");
    }
    ctl.delete(id, true).await;
    if let Some(msg) = ctl.message() {
        bail!("{msg}");
    }
    println!("Deleted entry {id}.");
    Ok(())
}

async fn profile(session: &SessionManager, args: &[String]) -> Result<()> {
    let mut ctl = ProfileController::new(session.clone());
    ctl.load().await;
    if let Some(msg) = ctl.message() {
        bail!("{msg}");
    }

    let email = flag(args, "--email");
    let password = flag(args, "--password");
    if email.is_none() && password.is_none() {
        let profile = ctl.profile().expect("profile loaded above");
        println!("username: {}", profile.username);
        println!("role:     {}", profile.role);
        println!("email:    {}", profile.email.as_deref().unwrap_or("-"));
        if let Some(created) = profile.created_at {
            println!("since:    {created}");
        }
        return Ok(());
    }

    if let Some(email) = email {
        ctl.email = email;
    }
    if let Some(password) = password {
        ctl.password = password;
        ctl.confirm_password = flag(args, "--confirm").unwrap_or_default();
    }

    if ctl.submit().await {
        println!("{}", ctl.message().unwrap_or_default());
        Ok(())
    } else {
        bail!("{}", ctl.message().unwrap_or("Failed to update profile"))
    }
}

fn fill_form(form: &mut EntryFormController, args: &[String]) {
    if let Some(v) = flag(args, "--title") {
        form.title = v;
    }
    if let Some(v) = flag(args, "--description") {
        form.description = v;
    }
    if let Some(v) = flag(args, "--genre") {
        form.genre = v;
    }
    if let Some(v) = flag(args, "--director") {
        form.director = v;
    }
    if let Some(v) = flag(args, "--year") {
        form.year_released = v;
    }
    if let Some(v) = flag(args, "--duration") {
        form.duration_minutes = v;
    }
    if let Some(v) = flag(args, "--rating") {
        form.rating = v;
    }
    if let Some(v) = flag(args, "--poster") {
        form.poster_url = v;
    }
}

fn flag(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn entry_id(args: &[String]) -> Result<EntryId> {
    let raw = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .context("an entry id is required")?;
    Ok(raw.parse::<EntryId>()?)
}

fn render(entries: &[CatalogEntry]) {
    if entries.is_empty() {
        println!("No movies found.");
        return;
    }
    for entry in entries {
        let year = entry
            .year_released
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        let genre = entry.genre.as_deref().unwrap_or("-");
        println!("{:>5}  {}  [{year}, {genre}]", entry.id, entry.title);
    }
}

fn render_one(entry: &CatalogEntry) {
    println!("id:       {}", entry.id);
    println!("title:    {}", entry.title);
    if let Some(description) = &entry.description {
        println!("about:    {description}");
    }
    if let Some(genre) = &entry.genre {
        println!("genre:    {genre}");
    }
    if let Some(director) = &entry.director {
        println!("director: {director}");
    }
    if let Some(year) = entry.year_released {
        println!("year:     {year}");
    }
    if let Some(minutes) = entry.duration_minutes {
        println!("length:   {minutes} min");
    }
    if let Some(rating) = entry.rating {
        println!("rating:   {rating}/10");
    }
    if let Some(url) = &entry.poster_url {
        println!("poster:   {url}");
    }
}
