//! Base tuple generation for a single record.
//!
//! The generator draws only from the RNG it is handed, so the seed controller
//! fully determines its output. English records come from the `fake` crate;
//! Russian and Ukrainian records are assembled from static regional tables.

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, SecondaryAddress, StateAbbr, StreetName};
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand::Rng;
use rand::seq::IndexedRandom;
use uuid::Uuid;

use crate::locale::{RegionalTables, Region, russia, ukraine};
use crate::record::{PersonFields, Record};

/// Share of US addresses that carry an apartment or suite (1 in 4).
const SECONDARY_ADDRESS_NUMERATOR: u32 = 1;

/// Denominator for the secondary address ratio.
const SECONDARY_ADDRESS_DENOMINATOR: u32 = 4;

/// Five-digit US ZIP code.
const US_ZIP_MASK: &str = "#####";

/// Highest house number used for regional addresses.
const MAX_HOUSE_NUMBER: u32 = 150;

/// Highest flat number used for regional addresses.
const MAX_FLAT_NUMBER: u32 = 300;

/// Generates the clean record at `index` from the supplied RNG.
///
/// The identifier is drawn first, then the name, address, and phone.
///
/// # Example
///
/// ```
/// use persona_data::{Region, generate_user_data};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let record = generate_user_data(Region::Usa, &mut rng, 1);
///
/// assert_eq!(record.index, 1);
/// assert!(!record.fields.name.is_empty());
/// ```
pub fn generate_user_data<R: Rng + ?Sized>(region: Region, rng: &mut R, index: u64) -> Record {
    let identifier = Uuid::from_u128(rng.random()).to_string();

    let fields = match region {
        Region::Usa => english_fields(rng),
        Region::Russia => regional_fields(rng, &russia::TABLES),
        Region::Ukraine => regional_fields(rng, &ukraine::TABLES),
    };

    Record {
        index,
        identifier,
        fields,
    }
}

fn english_fields<R: Rng + ?Sized>(rng: &mut R) -> PersonFields {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);

    let building: String = BuildingNumber(EN).fake_with_rng(rng);
    let street: String = StreetName(EN).fake_with_rng(rng);
    let city: String = CityName(EN).fake_with_rng(rng);
    let state: String = StateAbbr(EN).fake_with_rng(rng);
    let zip = fill_digit_mask(rng, US_ZIP_MASK);
    let street_line =
        if rng.random_ratio(SECONDARY_ADDRESS_NUMERATOR, SECONDARY_ADDRESS_DENOMINATOR) {
            let secondary: String = SecondaryAddress(EN).fake_with_rng(rng);
            format!("{building} {street}, {secondary}")
        } else {
            format!("{building} {street}")
        };

    let phone: String = PhoneNumber(EN).fake_with_rng(rng);

    PersonFields {
        name: format!("{first} {last}"),
        address: format!("{street_line}, {city}, {state} {zip}"),
        phone,
    }
}

/// Builds a surname, first name, and patronymic record with agreeing gender.
fn regional_fields<R: Rng + ?Sized>(rng: &mut R, tables: &RegionalTables) -> PersonFields {
    let is_female = rng.random_ratio(1, 2);
    let (surnames, first_names, patronymics) = if is_female {
        (
            tables.female_surnames,
            tables.female_first_names,
            tables.female_patronymics,
        )
    } else {
        (
            tables.male_surnames,
            tables.male_first_names,
            tables.male_patronymics,
        )
    };
    let surname = pick(rng, surnames);
    let first = pick(rng, first_names);
    let patronymic = pick(rng, patronymics);

    let postcode = fill_digit_mask(rng, tables.postcode_mask);
    let city = pick(rng, tables.cities);
    let street = pick(rng, tables.streets);
    let house = rng.random_range(1..=MAX_HOUSE_NUMBER);
    let flat = rng.random_range(1..=MAX_FLAT_NUMBER);

    let phone = fill_digit_mask(rng, tables.phone_mask);

    PersonFields {
        name: format!("{surname} {first} {patronymic}"),
        address: format!(
            "{postcode}, {} {city}, {} {street}, {} {house}, {} {flat}",
            tables.city_prefix, tables.street_prefix, tables.house_prefix, tables.flat_prefix
        ),
        phone,
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&'static str]) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Replaces every `#` in `mask` with a random decimal digit.
fn fill_digit_mask<R: Rng + ?Sized>(rng: &mut R, mask: &str) -> String {
    mask.chars()
        .map(|c| {
            if c == '#' {
                char::from_digit(rng.random_range(0..10), 10).unwrap_or('0')
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    fn record_for(region: Region, seed: u64) -> Record {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_user_data(region, &mut rng, 1)
    }

    #[rstest]
    #[case(Region::Usa)]
    #[case(Region::Russia)]
    #[case(Region::Ukraine)]
    fn generation_is_deterministic(#[case] region: Region) {
        assert_eq!(record_for(region, 42), record_for(region, 42));
    }

    #[rstest]
    #[case(Region::Usa)]
    #[case(Region::Russia)]
    #[case(Region::Ukraine)]
    fn fields_are_populated(#[case] region: Region) {
        let record = record_for(region, 7);
        assert!(!record.fields.name.is_empty());
        assert!(!record.fields.address.is_empty());
        assert!(!record.fields.phone.is_empty());
        assert!(Uuid::parse_str(&record.identifier).is_ok());
    }

    #[test]
    fn regional_names_have_three_parts() {
        for seed in 0..20 {
            let record = record_for(Region::Russia, seed);
            assert_eq!(record.fields.name.split(' ').count(), 3, "{record:?}");
        }
    }

    #[test]
    fn russian_phone_numbers_follow_the_mask() {
        let record = record_for(Region::Russia, 3);
        assert!(record.fields.phone.starts_with("+7 (9"));
        assert_eq!(record.fields.phone.chars().count(), "+7 (9##) ###-##-##".len());
    }

    #[test]
    fn ukrainian_addresses_use_local_prefixes() {
        let record = record_for(Region::Ukraine, 5);
        assert!(record.fields.address.contains("м. "));
        assert!(record.fields.address.contains("вул. "));
        assert!(record.fields.phone.starts_with("+380 ("));
    }

    #[test]
    fn us_addresses_end_with_a_five_digit_zip() {
        for seed in 0..200 {
            let record = record_for(Region::Usa, seed);
            let zip = record
                .fields
                .address
                .rsplit(' ')
                .next()
                .expect("address has a ZIP");
            assert_eq!(zip.len(), 5, "{record:?}");
            assert!(zip.chars().all(|c| c.is_ascii_digit()), "{record:?}");
        }
    }

    #[test]
    fn digit_mask_keeps_literals() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let filled = fill_digit_mask(&mut rng, "+1 (###)");
        assert!(filled.starts_with("+1 ("));
        assert!(filled.ends_with(')'));
        assert_eq!(
            filled.chars().filter(char::is_ascii_digit).count(),
            4,
            "{filled}"
        );
    }
}
