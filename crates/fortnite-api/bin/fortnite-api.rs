//! fortnite-api command-line client.
//!
//! Thin wrapper around the fortnite-api library: parses arguments, builds a
//! client, runs one call and prints the decoded result as pretty JSON.
//! Ctrl-C cancels the in-flight request.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fortnite_api::{
    AccountType, AesKeyParams, BASE_URL, BrStatsByIdParams, BrStatsByNameParams, Client,
    ClientConfig, CreatorCodeParams, KeyFormat, Language, MatchMethod, RequestContext,
    ResponseFlag, ResponseFlags, ResponseFlagsParams, SearchBrCosmeticParams, ShopParams,
    StatsImage, TimeWindow,
};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fortnite-api", version, about = "Query the fortnite-api.com REST service")]
struct Cli {
    /// API key, required for stats
    #[arg(long, env = "FORTNITE_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Response language, e.g. `en`, `de`, `pt-BR`
    #[arg(short, long, env = "FORTNITE_API_LANGUAGE", global = true)]
    language: Option<Language>,

    /// Request timeout in seconds
    #[arg(long, env = "FORTNITE_API_TIMEOUT", default_value_t = 30, global = true)]
    timeout: u64,

    #[arg(long, env = "FORTNITE_API_BASE_URL", default_value = BASE_URL, hide = true)]
    base_url: String,

    /// Request optional response fields (repeatable)
    #[arg(long = "include", value_enum, global = true)]
    include: Vec<Include>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Current AES keys
    Aes {
        #[arg(long, value_enum)]
        format: Option<KeyFormatArg>,
    },
    /// Banner icons
    Banners,
    /// Banner colors
    BannerColors,
    /// Cosmetic listings and lookups
    #[command(subcommand)]
    Cosmetics(CosmeticsCommand),
    /// Look up a support-a-creator code
    CreatorCode { name: String },
    /// Battle royale map
    Map,
    /// In-game news
    News {
        #[arg(value_enum)]
        mode: Option<NewsMode>,
    },
    /// Playlists, or one playlist by id
    Playlists {
        #[arg(long)]
        id: Option<String>,
    },
    /// Current item shop
    Shop,
    /// Battle royale player stats
    #[command(subcommand)]
    Stats(StatsCommand),
}

#[derive(Debug, Subcommand)]
enum CosmeticsCommand {
    /// Every cosmetic of every kind
    All,
    /// Cosmetics added in the latest build
    New,
    Br,
    Tracks,
    Instruments,
    Cars,
    Lego,
    LegoKits,
    Beans,
    /// One battle royale cosmetic by id
    Get { id: String },
    /// First battle royale cosmetic matching the filters
    Search(SearchArgs),
    /// Every battle royale cosmetic matching the filters
    SearchAll(SearchArgs),
    /// Battle royale cosmetics by id
    Ids {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
enum StatsCommand {
    /// Stats by account display name
    Name {
        name: String,
        #[arg(long, value_enum)]
        account_type: Option<AccountTypeArg>,
        #[command(flatten)]
        filter: StatsArgs,
    },
    /// Stats by account id
    Id {
        id: String,
        #[command(flatten)]
        filter: StatsArgs,
    },
}

#[derive(Debug, Args)]
struct StatsArgs {
    #[arg(long, value_enum)]
    time_window: Option<TimeWindowArg>,
    #[arg(long, value_enum)]
    image: Option<StatsImageArg>,
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long, value_enum)]
    match_method: Option<MatchMethodArg>,
    #[arg(long)]
    search_language: Option<Language>,
    #[arg(long = "type")]
    cosmetic_type: Option<String>,
    #[arg(long)]
    rarity: Option<String>,
    #[arg(long)]
    series: Option<String>,
    #[arg(long)]
    set: Option<String>,
    #[arg(long)]
    gameplay_tag: Option<String>,
}

impl SearchArgs {
    fn into_params(self, response_flags: Option<ResponseFlags>) -> SearchBrCosmeticParams {
        SearchBrCosmeticParams {
            id: self.id,
            name: self.name,
            match_method: self.match_method.map(Into::into),
            search_language: self.search_language,
            cosmetic_type: self.cosmetic_type,
            rarity: self.rarity,
            series: self.series,
            set: self.set,
            gameplay_tag: self.gameplay_tag,
            response_flags,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Include {
    Paths,
    GameplayTags,
    ShopHistory,
}

impl From<Include> for ResponseFlag {
    fn from(value: Include) -> Self {
        match value {
            Include::Paths => Self::IncludePaths,
            Include::GameplayTags => Self::IncludeGameplayTags,
            Include::ShopHistory => Self::IncludeShopHistory,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NewsMode {
    Br,
    Stw,
    Creative,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KeyFormatArg {
    Hex,
    Base64,
}

impl From<KeyFormatArg> for KeyFormat {
    fn from(value: KeyFormatArg) -> Self {
        match value {
            KeyFormatArg::Hex => Self::Hex,
            KeyFormatArg::Base64 => Self::Base64,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MatchMethodArg {
    Full,
    Contains,
    Starts,
    Ends,
}

impl From<MatchMethodArg> for MatchMethod {
    fn from(value: MatchMethodArg) -> Self {
        match value {
            MatchMethodArg::Full => Self::Full,
            MatchMethodArg::Contains => Self::Contains,
            MatchMethodArg::Starts => Self::Starts,
            MatchMethodArg::Ends => Self::Ends,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AccountTypeArg {
    Epic,
    Psn,
    Xbl,
}

impl From<AccountTypeArg> for AccountType {
    fn from(value: AccountTypeArg) -> Self {
        match value {
            AccountTypeArg::Epic => Self::Epic,
            AccountTypeArg::Psn => Self::Psn,
            AccountTypeArg::Xbl => Self::Xbl,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TimeWindowArg {
    Season,
    Lifetime,
}

impl From<TimeWindowArg> for TimeWindow {
    fn from(value: TimeWindowArg) -> Self {
        match value {
            TimeWindowArg::Season => Self::Season,
            TimeWindowArg::Lifetime => Self::Lifetime,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatsImageArg {
    All,
    KeyboardMouse,
    Gamepad,
    Touch,
}

impl From<StatsImageArg> for StatsImage {
    fn from(value: StatsImageArg) -> Self {
        match value {
            StatsImageArg::All => Self::All,
            StatsImageArg::KeyboardMouse => Self::KeyboardMouse,
            StatsImageArg::Gamepad => Self::Gamepad,
            StatsImageArg::Touch => Self::Touch,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::new()
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout));
    if let Some(language) = cli.language {
        config = config.with_language(language);
    }
    if let Some(api_key) = cli.api_key {
        config = config.with_api_key(api_key);
    }
    let client = Client::new(config).context("failed to create client")?;

    let ctx = RequestContext::new();
    let token = ctx.cancellation_token().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupted, cancelling request");
            token.cancel();
        }
    });

    let flags = (!cli.include.is_empty())
        .then(|| cli.include.into_iter().map(ResponseFlag::from).collect::<ResponseFlags>());

    let value = run(&client, &ctx, cli.command, flags)
        .await
        .context("request failed")?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}

async fn run(
    client: &Client,
    ctx: &RequestContext,
    command: Command,
    flags: Option<ResponseFlags>,
) -> Result<Value> {
    match command {
        Command::Aes { format } => {
            let params = AesKeyParams {
                key_format: format.map(Into::into),
                response_flags: flags,
            };
            json(client.get_aes_key(ctx, Some(params)).await?)
        }
        Command::Banners => json(client.get_banners(ctx, None).await?),
        Command::BannerColors => json(client.get_banner_colors(ctx).await?),
        Command::Cosmetics(command) => cosmetics(client, ctx, command, flags).await,
        Command::CreatorCode { name } => {
            let params = CreatorCodeParams {
                name: None,
                response_flags: flags,
            };
            json(client.get_creator_code(ctx, &name, Some(params)).await?)
        }
        Command::Map => json(client.get_br_map(ctx, None).await?),
        Command::News { mode } => match mode {
            None => json(client.get_news(ctx, None).await?),
            Some(NewsMode::Br) => json(client.get_br_news(ctx, None).await?),
            Some(NewsMode::Stw) => json(client.get_stw_news(ctx, None).await?),
            Some(NewsMode::Creative) => json(client.get_creative_news(ctx, None).await?),
        },
        Command::Playlists { id: None } => json(client.get_playlists(ctx, None).await?),
        Command::Playlists { id: Some(id) } => {
            json(client.get_playlist_by_id(ctx, &id, None).await?)
        }
        Command::Shop => {
            let params = ShopParams {
                language: None,
                response_flags: flags,
            };
            json(client.get_shop(ctx, Some(params)).await?)
        }
        Command::Stats(StatsCommand::Name {
            name,
            account_type,
            filter,
        }) => {
            let params = BrStatsByNameParams {
                name: None,
                account_type: account_type.map(Into::into),
                time_window: filter.time_window.map(Into::into),
                image: filter.image.map(Into::into),
                response_flags: flags,
            };
            json(client.get_br_stats_by_name(ctx, &name, Some(params)).await?)
        }
        Command::Stats(StatsCommand::Id { id, filter }) => {
            let params = BrStatsByIdParams {
                time_window: filter.time_window.map(Into::into),
                image: filter.image.map(Into::into),
                response_flags: flags,
            };
            json(client.get_br_stats_by_id(ctx, &id, Some(params)).await?)
        }
    }
}

async fn cosmetics(
    client: &Client,
    ctx: &RequestContext,
    command: CosmeticsCommand,
    flags: Option<ResponseFlags>,
) -> Result<Value> {
    let flag_params = ResponseFlagsParams {
        response_flags: flags,
    };

    match command {
        CosmeticsCommand::All => json(client.get_all_cosmetics(ctx, None).await?),
        CosmeticsCommand::New => json(client.get_new_cosmetics(ctx, None).await?),
        CosmeticsCommand::Br => json(client.get_br_cosmetics(ctx, None).await?),
        CosmeticsCommand::Tracks => json(client.get_track_cosmetics(ctx, Some(flag_params)).await?),
        CosmeticsCommand::Instruments => json(client.get_instrument_cosmetics(ctx, None).await?),
        CosmeticsCommand::Cars => json(client.get_car_cosmetics(ctx, None).await?),
        CosmeticsCommand::Lego => json(client.get_lego_cosmetics(ctx, Some(flag_params)).await?),
        CosmeticsCommand::LegoKits => json(client.get_lego_kit_cosmetics(ctx, None).await?),
        CosmeticsCommand::Beans => json(client.get_bean_cosmetics(ctx, None).await?),
        CosmeticsCommand::Get { id } => json(client.get_br_cosmetic_by_id(ctx, &id, None).await?),
        CosmeticsCommand::Search(args) => {
            let params = args.into_params(flags);
            json(client.search_br_cosmetic(ctx, Some(params)).await?)
        }
        CosmeticsCommand::SearchAll(args) => {
            let params = args.into_params(flags);
            json(client.search_br_cosmetics(ctx, Some(params)).await?)
        }
        CosmeticsCommand::Ids { ids } => {
            json(client.search_br_cosmetics_by_ids(ctx, &ids, None).await?)
        }
    }
}

fn json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("failed to serialize response")
}
