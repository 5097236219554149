//! The standard-variant map table.
//!
//! Territory and named-coast ids are the stable integers used by the
//! persistence layer. The table is authoritative for this crate: a handful
//! of one-sided or misnumbered edges in upstream data (an Aegean/Black Sea
//! link, a Moscow/Rumania link, spurious Paris and Trieste neighbours) are
//! corrected here rather than reproduced.

use lazy_static::lazy_static;

use crate::geo::{NamedCoast, Terrain, Territory, TerritoryId};
use crate::nation::Nation;

/// Territory ids of the standard map.
pub mod territories {
    use crate::geo::TerritoryId;

    pub const ADRIATIC_SEA: TerritoryId = TerritoryId(1);
    pub const AEGEAN_SEA: TerritoryId = TerritoryId(2);
    pub const BALTIC_SEA: TerritoryId = TerritoryId(3);
    pub const BARENTS_SEA: TerritoryId = TerritoryId(4);
    pub const BLACK_SEA: TerritoryId = TerritoryId(5);
    pub const GULF_OF_BOTHNIA: TerritoryId = TerritoryId(6);
    pub const EASTERN_MEDITERRANEAN: TerritoryId = TerritoryId(7);
    pub const ENGLISH_CHANNEL: TerritoryId = TerritoryId(8);
    pub const GULF_OF_LYON: TerritoryId = TerritoryId(9);
    pub const HELGOLAND_BIGHT: TerritoryId = TerritoryId(10);
    pub const IONIAN_SEA: TerritoryId = TerritoryId(11);
    pub const IRISH_SEA: TerritoryId = TerritoryId(12);
    pub const MID_ATLANTIC: TerritoryId = TerritoryId(13);
    pub const NORTH_ATLANTIC: TerritoryId = TerritoryId(14);
    pub const NORWEGIAN_SEA: TerritoryId = TerritoryId(15);
    pub const NORTH_SEA: TerritoryId = TerritoryId(16);
    pub const SKAGERRAK: TerritoryId = TerritoryId(17);
    pub const TYRRHENIAN_SEA: TerritoryId = TerritoryId(18);
    pub const WESTERN_MEDITERRANEAN: TerritoryId = TerritoryId(19);
    pub const ALBANIA: TerritoryId = TerritoryId(20);
    pub const ANKARA: TerritoryId = TerritoryId(21);
    pub const APULIA: TerritoryId = TerritoryId(22);
    pub const ARMENIA: TerritoryId = TerritoryId(23);
    pub const BERLIN: TerritoryId = TerritoryId(24);
    pub const BELGIUM: TerritoryId = TerritoryId(25);
    pub const BREST: TerritoryId = TerritoryId(26);
    pub const CLYDE: TerritoryId = TerritoryId(27);
    pub const CONSTANTINOPLE: TerritoryId = TerritoryId(28);
    pub const DENMARK: TerritoryId = TerritoryId(29);
    pub const EDINBURGH: TerritoryId = TerritoryId(30);
    pub const FINLAND: TerritoryId = TerritoryId(31);
    pub const GASCONY: TerritoryId = TerritoryId(32);
    pub const GREECE: TerritoryId = TerritoryId(33);
    pub const HOLLAND: TerritoryId = TerritoryId(34);
    pub const KIEL: TerritoryId = TerritoryId(35);
    pub const LONDON: TerritoryId = TerritoryId(36);
    pub const LIVONIA: TerritoryId = TerritoryId(37);
    pub const LIVERPOOL: TerritoryId = TerritoryId(38);
    pub const MARSEILLES: TerritoryId = TerritoryId(39);
    pub const NORTH_AFRICA: TerritoryId = TerritoryId(40);
    pub const NAPLES: TerritoryId = TerritoryId(41);
    pub const NORWAY: TerritoryId = TerritoryId(42);
    pub const PICARDY: TerritoryId = TerritoryId(43);
    pub const PIEDMONT: TerritoryId = TerritoryId(44);
    pub const PORTUGAL: TerritoryId = TerritoryId(45);
    pub const ROME: TerritoryId = TerritoryId(46);
    pub const RUMANIA: TerritoryId = TerritoryId(47);
    pub const PRUSSIA: TerritoryId = TerritoryId(48);
    pub const SEVASTOPOL: TerritoryId = TerritoryId(49);
    pub const SMYRNA: TerritoryId = TerritoryId(50);
    pub const SWEDEN: TerritoryId = TerritoryId(51);
    pub const SYRIA: TerritoryId = TerritoryId(52);
    pub const TRIESTE: TerritoryId = TerritoryId(53);
    pub const TUNIS: TerritoryId = TerritoryId(54);
    pub const TUSCANY: TerritoryId = TerritoryId(55);
    pub const VENICE: TerritoryId = TerritoryId(56);
    pub const WALES: TerritoryId = TerritoryId(57);
    pub const YORKSHIRE: TerritoryId = TerritoryId(58);
    pub const BOHEMIA: TerritoryId = TerritoryId(59);
    pub const BUDAPEST: TerritoryId = TerritoryId(60);
    pub const BURGUNDY: TerritoryId = TerritoryId(61);
    pub const GALICIA: TerritoryId = TerritoryId(62);
    pub const MOSCOW: TerritoryId = TerritoryId(63);
    pub const MUNICH: TerritoryId = TerritoryId(64);
    pub const PARIS: TerritoryId = TerritoryId(65);
    pub const RUHR: TerritoryId = TerritoryId(66);
    pub const SERBIA: TerritoryId = TerritoryId(67);
    pub const SILESIA: TerritoryId = TerritoryId(68);
    pub const TYROLIA: TerritoryId = TerritoryId(69);
    pub const UKRAINE: TerritoryId = TerritoryId(70);
    pub const VIENNA: TerritoryId = TerritoryId(71);
    pub const WARSAW: TerritoryId = TerritoryId(72);
    pub const BULGARIA: TerritoryId = TerritoryId(73);
    pub const SPAIN: TerritoryId = TerritoryId(74);
    pub const ST_PETERSBURG: TerritoryId = TerritoryId(75);
}

/// Named-coast ids of the standard map.
pub mod coasts {
    use crate::geo::CoastId;

    pub const SPAIN_SC: CoastId = CoastId(1);
    pub const SPAIN_NC: CoastId = CoastId(2);
    pub const BULGARIA_EC: CoastId = CoastId(3);
    pub const BULGARIA_SC: CoastId = CoastId(4);
    pub const ST_PETERSBURG_NC: CoastId = CoastId(5);
    pub const ST_PETERSBURG_SC: CoastId = CoastId(6);
}

/// Nation names of the standard map.
pub mod nations {
    pub const ENGLAND: &str = "ENGLAND";
    pub const FRANCE: &str = "FRANCE";
    pub const GERMANY: &str = "GERMANY";
    pub const ITALY: &str = "ITALY";
    pub const AUSTRIA: &str = "AUSTRIA";
    pub const TURKEY: &str = "TURKEY";
    pub const RUSSIA: &str = "RUSSIA";
}

lazy_static! {
    static ref STANDARD: Vec<Territory> = build_standard();
}

/// A fresh copy of the standard map table, with home supply centers under
/// their home nation's control and neutral centers unowned.
pub fn standard_territories() -> Vec<Territory> {
    STANDARD.clone()
}

fn ids(raw: &[u32]) -> Vec<TerritoryId> {
    raw.iter().copied().map(TerritoryId).collect()
}

fn sea(id: u32, name: &str, neighbours: &[u32]) -> Territory {
    Territory {
        id: TerritoryId(id),
        name: String::from(name),
        terrain: Terrain::Sea,
        neighbours: ids(neighbours),
        shared_coasts: Vec::new(),
        named_coasts: Vec::new(),
        supply_center: false,
        nationality: None,
        controlled_by: None,
        contested: false,
    }
}

fn coastal(
    id: u32,
    name: &str,
    nationality: Option<&str>,
    neighbours: &[u32],
    shared_coasts: &[u32],
) -> Territory {
    Territory {
        id: TerritoryId(id),
        name: String::from(name),
        terrain: Terrain::Coastal,
        neighbours: ids(neighbours),
        shared_coasts: ids(shared_coasts),
        named_coasts: Vec::new(),
        supply_center: false,
        nationality: nationality.map(Nation::from),
        controlled_by: None,
        contested: false,
    }
}

fn inland(id: u32, name: &str, nationality: Option<&str>, neighbours: &[u32]) -> Territory {
    Territory {
        id: TerritoryId(id),
        name: String::from(name),
        terrain: Terrain::Inland,
        neighbours: ids(neighbours),
        shared_coasts: Vec::new(),
        named_coasts: Vec::new(),
        supply_center: false,
        nationality: nationality.map(Nation::from),
        controlled_by: None,
        contested: false,
    }
}

fn named_coast(id: u32, name: &str, parent: u32, neighbours: &[u32]) -> NamedCoast {
    NamedCoast {
        id: crate::geo::CoastId(id),
        name: String::from(name),
        parent_id: TerritoryId(parent),
        neighbours: ids(neighbours),
    }
}

fn supply_center(mut territory: Territory) -> Territory {
    territory.supply_center = true;
    territory.controlled_by = territory.nationality.clone();
    territory
}

fn with_coasts(mut territory: Territory, named_coasts: Vec<NamedCoast>) -> Territory {
    territory.named_coasts = named_coasts;
    territory
}

fn build_standard() -> Vec<Territory> {
    use self::nations::*;

    vec![
        sea(1, "adriatic sea", &[20, 22, 11, 53, 56]),
        sea(2, "aegean sea", &[73, 28, 7, 33, 11, 50]),
        sea(3, "baltic sea", &[24, 6, 29, 35, 48, 51, 37]),
        sea(4, "barents sea", &[15, 42, 75]),
        sea(5, "black sea", &[21, 23, 73, 28, 47, 49]),
        sea(6, "gulf of bothnia", &[3, 31, 37, 51, 75]),
        sea(7, "eastern mediterranean", &[2, 50, 52]),
        sea(8, "english channel", &[25, 26, 12, 36, 13, 16, 43, 57]),
        sea(9, "gulf of lyon", &[39, 44, 74, 55, 18, 19]),
        sea(10, "helgoland bight", &[29, 34, 35, 16]),
        sea(11, "ionian sea", &[2, 1, 20, 22, 33, 41, 54, 18]),
        sea(12, "irish sea", &[8, 38, 13, 14, 57]),
        sea(13, "mid atlantic", &[26, 8, 32, 12, 40, 14, 74, 45, 19]),
        sea(14, "north atlantic", &[27, 12, 38, 13, 15]),
        sea(15, "norwegian sea", &[4, 27, 30, 14, 42, 16]),
        sea(16, "north sea", &[25, 29, 30, 8, 10, 34, 36, 15, 42, 17, 58]),
        sea(17, "skagerrak", &[29, 16, 42, 51]),
        sea(18, "tyrrhenian sea", &[9, 11, 41, 46, 54, 55, 19]),
        sea(19, "western mediterranean", &[9, 13, 40, 74, 54, 18]),
        coastal(20, "albania", None, &[1, 33, 11, 67, 53], &[33, 53]),
        supply_center(coastal(21, "ankara", Some(TURKEY), &[23, 5, 28, 50], &[23, 28])),
        coastal(22, "apulia", Some(ITALY), &[1, 11, 41, 46, 56], &[41, 56]),
        coastal(23, "armenia", Some(TURKEY), &[21, 5, 49, 50, 52], &[49, 21]),
        supply_center(coastal(
            24,
            "berlin",
            Some(GERMANY),
            &[3, 35, 64, 48, 68],
            &[35, 48],
        )),
        supply_center(coastal(
            25,
            "belgium",
            None,
            &[61, 8, 34, 43, 66, 16],
            &[34, 43],
        )),
        supply_center(coastal(
            26,
            "brest",
            Some(FRANCE),
            &[8, 32, 13, 65, 43],
            &[32, 43],
        )),
        coastal(27, "clyde", Some(ENGLAND), &[30, 38, 12, 14, 15], &[30, 38]),
        supply_center(coastal(
            28,
            "constantinople",
            Some(TURKEY),
            &[2, 21, 5, 73, 50],
            &[21, 50],
        )),
        supply_center(coastal(
            29,
            "denmark",
            None,
            &[3, 10, 35, 16, 17, 51],
            &[35, 51],
        )),
        supply_center(coastal(
            30,
            "edinburgh",
            Some(ENGLAND),
            &[27, 38, 15, 16, 58],
            &[27, 58],
        )),
        coastal(31, "finland", None, &[6, 42, 75, 51], &[51]),
        coastal(
            32,
            "gascony",
            Some(FRANCE),
            &[26, 61, 39, 13, 65, 74],
            &[26],
        ),
        supply_center(coastal(33, "greece", None, &[2, 20, 73, 11, 67], &[20, 73])),
        supply_center(coastal(34, "holland", None, &[25, 10, 35, 16, 66], &[25, 35])),
        supply_center(coastal(
            35,
            "kiel",
            Some(GERMANY),
            &[3, 24, 29, 10, 34, 64, 66],
            &[24, 29, 34],
        )),
        supply_center(coastal(
            36,
            "london",
            Some(ENGLAND),
            &[8, 16, 57, 58],
            &[57, 58],
        )),
        coastal(37, "livonia", Some(RUSSIA), &[3, 6, 63, 48, 75, 72], &[48]),
        supply_center(coastal(
            38,
            "liverpool",
            Some(ENGLAND),
            &[27, 30, 12, 14, 57, 58],
            &[27, 57],
        )),
        supply_center(coastal(
            39,
            "marseilles",
            Some(FRANCE),
            &[61, 32, 9, 44, 74],
            &[44],
        )),
        coastal(40, "north africa", None, &[13, 54, 19], &[54]),
        supply_center(coastal(
            41,
            "naples",
            Some(ITALY),
            &[22, 11, 46, 18],
            &[22, 46],
        )),
        supply_center(coastal(
            42,
            "norway",
            None,
            &[4, 31, 15, 16, 17, 75, 51],
            &[51],
        )),
        coastal(43, "picardy", Some(FRANCE), &[26, 25, 61, 8, 65], &[26, 25]),
        coastal(44, "piedmont", Some(ITALY), &[9, 39, 55, 69, 56], &[39, 55]),
        supply_center(coastal(45, "portugal", None, &[13, 74], &[])),
        supply_center(coastal(
            46,
            "rome",
            Some(ITALY),
            &[22, 41, 55, 18, 56],
            &[41, 55],
        )),
        supply_center(coastal(
            47,
            "rumania",
            None,
            &[5, 60, 73, 62, 67, 49, 70],
            &[49],
        )),
        coastal(48, "prussia", Some(GERMANY), &[3, 24, 37, 68, 72], &[24, 37]),
        supply_center(coastal(
            49,
            "sevastopol",
            Some(RUSSIA),
            &[23, 5, 63, 47, 70],
            &[23, 47],
        )),
        supply_center(coastal(
            50,
            "smyrna",
            Some(TURKEY),
            &[2, 23, 21, 28, 7, 52],
            &[28, 52],
        )),
        supply_center(coastal(
            51,
            "sweden",
            None,
            &[3, 6, 29, 31, 42, 17],
            &[29, 31, 42],
        )),
        coastal(52, "syria", Some(TURKEY), &[23, 7, 50], &[50]),
        supply_center(coastal(
            53,
            "trieste",
            Some(AUSTRIA),
            &[1, 20, 60, 69, 67, 56, 71],
            &[20, 56],
        )),
        supply_center(coastal(54, "tunis", None, &[11, 40, 18, 19], &[40])),
        coastal(55, "tuscany", Some(ITALY), &[9, 44, 46, 18, 56], &[44, 46]),
        supply_center(coastal(
            56,
            "venice",
            Some(ITALY),
            &[1, 22, 46, 44, 53, 55, 69],
            &[22, 53],
        )),
        coastal(57, "wales", Some(ENGLAND), &[8, 12, 36, 38, 58], &[36, 38]),
        coastal(
            58,
            "yorkshire",
            Some(ENGLAND),
            &[30, 36, 38, 16, 57],
            &[30, 36],
        ),
        inland(59, "bohemia", Some(AUSTRIA), &[62, 64, 68, 69, 71]),
        supply_center(inland(60, "budapest", Some(AUSTRIA), &[62, 47, 67, 53, 71])),
        inland(61, "burgundy", Some(FRANCE), &[25, 32, 39, 64, 65, 43, 66]),
        inland(62, "galicia", Some(AUSTRIA), &[59, 60, 47, 68, 70, 71, 72]),
        supply_center(inland(63, "moscow", Some(RUSSIA), &[37, 49, 75, 70, 72])),
        supply_center(inland(
            64,
            "munich",
            Some(GERMANY),
            &[24, 59, 61, 35, 68, 66, 69],
        )),
        supply_center(inland(65, "paris", Some(FRANCE), &[26, 61, 32, 43])),
        inland(66, "ruhr", Some(GERMANY), &[25, 61, 34, 35, 64]),
        supply_center(inland(67, "serbia", None, &[20, 60, 73, 33, 47, 53])),
        inland(68, "silesia", Some(GERMANY), &[24, 59, 62, 64, 48, 72]),
        inland(69, "tyrolia", Some(AUSTRIA), &[59, 64, 53, 56, 71]),
        inland(70, "ukraine", Some(RUSSIA), &[62, 63, 47, 49, 72]),
        supply_center(inland(71, "vienna", Some(AUSTRIA), &[59, 60, 62, 53, 69])),
        supply_center(inland(72, "warsaw", Some(RUSSIA), &[62, 37, 63, 68, 48, 70])),
        supply_center(with_coasts(
            coastal(73, "bulgaria", None, &[2, 5, 28, 33, 47, 67], &[47, 33, 28]),
            vec![
                named_coast(3, "bulgaria ec", 73, &[5, 47, 28]),
                named_coast(4, "bulgaria sc", 73, &[28, 2, 33]),
            ],
        )),
        supply_center(with_coasts(
            coastal(74, "spain", None, &[32, 39, 45, 9, 19, 13], &[32, 45, 39]),
            vec![
                named_coast(1, "spain sc", 74, &[39, 45, 13, 19, 9]),
                named_coast(2, "spain nc", 74, &[45, 13, 32]),
            ],
        )),
        supply_center(with_coasts(
            coastal(
                75,
                "st petersburg",
                Some(RUSSIA),
                &[4, 31, 37, 63, 42],
                &[37, 31, 42],
            ),
            vec![
                named_coast(5, "st petersburg nc", 75, &[4, 42]),
                named_coast(6, "st petersburg sc", 75, &[31, 37, 6]),
            ],
        )),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn standard_table_indexes_cleanly() {
        let table = standard_territories();
        assert_eq!(75, table.len());
        crate::geo::Map::new(&table).expect("standard map should validate");
    }

    #[test]
    fn thirty_four_supply_centers() {
        let table = standard_territories();
        assert_eq!(34, table.iter().filter(|t| t.supply_center).count());
        assert_eq!(
            22,
            table
                .iter()
                .filter(|t| t.supply_center && t.nationality.is_some())
                .count()
        );
    }

    #[test]
    fn home_centers_start_under_home_control() {
        let table = standard_territories();
        let berlin = table
            .iter()
            .find(|t| t.id == territories::BERLIN)
            .unwrap();
        assert_eq!(berlin.controlled_by, Some(Nation::from(nations::GERMANY)));

        let belgium = table
            .iter()
            .find(|t| t.id == territories::BELGIUM)
            .unwrap();
        assert!(belgium.supply_center);
        assert_eq!(belgium.controlled_by, None);
    }
}
