use clap::{Parser, Subcommand};
use client::api::{DEFAULT_SERVER, PlacesApi};
use places::form::PlaceForm;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, env = "PLACES_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the category set
    Categories,

    /// List places, newest first
    List {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        search: Option<String>,

        /// Untick a category in the map filter
        #[arg(long)]
        hide: Vec<String>,
    },

    Show {
        id: String,
    },

    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        address: String,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        #[arg(long)]
        place_id: Option<String>,

        #[arg(long = "image")]
        images: Vec<String>,

        #[arg(long)]
        submitted_by: Option<String>,
    },

    Delete {
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let api = PlacesApi::new(&args.server);

    match args.command {
        Command::Categories => client::show_categories(&api).await,
        Command::List {
            category,
            search,
            hide,
        } => client::list_places(&api, category.as_deref(), search.as_deref(), &hide).await,
        Command::Show { id } => client::show_place(&api, &id).await,
        Command::Add {
            name,
            description,
            category,
            address,
            lat,
            lng,
            place_id,
            images,
            submitted_by,
        } => {
            let form = PlaceForm {
                name,
                description,
                category,
                address,
                lat,
                lng,
                place_id,
                images,
                submitted_by,
            };

            client::add_place(&api, &form).await
        }
        Command::Delete { id } => client::delete_place(&api, &id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args() {
        let args = Args::try_parse_from([
            "places-cli",
            "--server",
            "http://places.local",
            "list",
            "--category",
            "Museum",
            "--hide",
            "Cafe",
            "--hide",
            "Dog Walking",
        ])
        .unwrap();

        assert_eq!(args.server, "http://places.local");
        let Command::List { category, hide, search } = args.command else {
            panic!("expected list");
        };
        assert_eq!(category.as_deref(), Some("Museum"));
        assert_eq!(search, None);
        assert_eq!(hide, ["Cafe", "Dog Walking"]);
    }

    #[test]
    fn test_add_args() {
        let args = Args::try_parse_from([
            "places-cli",
            "add",
            "--name",
            "Hellasgården",
            "--description",
            "Lake swimming and sauna",
            "--category",
            "Beach",
            "--address",
            "Ältavägen 101, Nacka",
            "--lat",
            "59.2906",
            "--lng",
            "18.1600",
            "--image",
            "https://example.com/a.jpg",
        ])
        .unwrap();

        let Command::Add { lat, images, submitted_by, .. } = args.command else {
            panic!("expected add");
        };
        assert_eq!(lat, 59.2906);
        assert_eq!(images.len(), 1);
        assert_eq!(submitted_by, None);
    }
}
