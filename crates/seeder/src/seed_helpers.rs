use campgrounds::CampgroundFields;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Cover image used for every seeded campground
pub const SEED_IMAGE: &str = "https://source.unsplash.com/collection/483251";

/// Description used for every seeded campground
pub const SEED_DESCRIPTION: &str = "Lorem ipsum, dolor sit amet consectetur adipisicing elit. \
Reiciendis nesciunt, at maxime distinctio numquam atque molestias corrupti molestiae amet consequatur.";

/// (city, state) pairs seeded locations are drawn from
pub const CITIES: &[(&str, &str)] = &[
    ("New York", "New York"),
    ("Los Angeles", "California"),
    ("Chicago", "Illinois"),
    ("Houston", "Texas"),
    ("Phoenix", "Arizona"),
    ("Philadelphia", "Pennsylvania"),
    ("San Antonio", "Texas"),
    ("San Diego", "California"),
    ("Dallas", "Texas"),
    ("San Jose", "California"),
    ("Austin", "Texas"),
    ("Jacksonville", "Florida"),
    ("Columbus", "Ohio"),
    ("Charlotte", "North Carolina"),
    ("Indianapolis", "Indiana"),
    ("Seattle", "Washington"),
    ("Denver", "Colorado"),
    ("Boulder", "Colorado"),
    ("Nashville", "Tennessee"),
    ("Portland", "Oregon"),
    ("Las Vegas", "Nevada"),
    ("Albuquerque", "New Mexico"),
    ("Tucson", "Arizona"),
    ("Sacramento", "California"),
    ("Salt Lake City", "Utah"),
    ("Boise", "Idaho"),
    ("Bozeman", "Montana"),
    ("Flagstaff", "Arizona"),
    ("Asheville", "North Carolina"),
    ("Anchorage", "Alaska"),
];

/// First word of a seeded title
pub const DESCRIPTORS: &[&str] = &[
    "Forest",
    "Ancient",
    "Petrified",
    "Roaring",
    "Cascade",
    "Tumbling",
    "Silent",
    "Redwood",
    "Bullfrog",
    "Maple",
    "Misty",
    "Elk",
    "Grizzly",
    "Ocean",
    "Sea",
    "Sky",
    "Dusty",
    "Diamond",
];

/// Second word of a seeded title
pub const PLACES: &[&str] = &[
    "Flats",
    "Village",
    "Canyon",
    "Pond",
    "Group Camp",
    "Horse Camp",
    "Ghost Town",
    "Camp",
    "Dispersed Camp",
    "Backcountry",
    "River",
    "Creek",
    "Creekside",
    "Bay",
    "Spring",
    "Bayshore",
    "Sands",
    "Mule Camp",
    "Hunting Camp",
    "Cliffs",
    "Hollow",
];

fn sample<'a, R: Rng + ?Sized>(rng: &mut R, items: &'a [&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Builds one random campground with a price between 10 and 109
pub fn random_campground<R: Rng + ?Sized>(rng: &mut R) -> CampgroundFields {
    let (city, state) = CITIES.choose(rng).copied().unwrap_or(("Boulder", "Colorado"));

    CampgroundFields {
        title: format!("{} {}", sample(rng, DESCRIPTORS), sample(rng, PLACES)),
        location: format!("{}, {}", city, state),
        image: SEED_IMAGE.to_string(),
        description: SEED_DESCRIPTION.to_string(),
        price: f64::from(rng.random_range(10u32..110)),
    }
}
