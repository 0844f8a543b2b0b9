//! Fixed squad loaded by the U17 World Cup seed endpoint.

use touchline_domain::player::Position;

pub const U17_WORLD_CUP_SQUAD: &str = "u17-world-cup";

/// `(shirt number, full name, position, club, birth year)`
pub type SeedEntry = (i16, &'static str, Position, &'static str, i16);

pub const U17_WORLD_CUP_ROSTER: &[SeedEntry] = &[
    (1, "Mateo Arrieta", Position::Goalkeeper, "Harbor City Academy", 2008),
    (12, "Jonas Feld", Position::Goalkeeper, "Northgate FC U18", 2009),
    (21, "Kwame Osei", Position::Goalkeeper, "Riverside Athletic", 2008),
    (2, "Luca Bernardi", Position::Defender, "Harbor City Academy", 2008),
    (3, "Samir Haddad", Position::Defender, "Eastfield United", 2008),
    (4, "Tomás Villalba", Position::Defender, "Northgate FC U18", 2009),
    (5, "Elias Brandt", Position::Defender, "Westbrook Rovers", 2008),
    (13, "Noah Kimura", Position::Defender, "Riverside Athletic", 2009),
    (14, "Ibrahim Diallo", Position::Defender, "Eastfield United", 2008),
    (15, "Oskar Lindqvist", Position::Defender, "Lakeshore SC", 2009),
    (6, "Rafael Quintero", Position::Midfielder, "Harbor City Academy", 2008),
    (8, "Adam Novak", Position::Midfielder, "Westbrook Rovers", 2008),
    (10, "Yusuf Demir", Position::Midfielder, "Northgate FC U18", 2008),
    (16, "Theo Marchetti", Position::Midfielder, "Lakeshore SC", 2009),
    (17, "Daniel Okafor", Position::Midfielder, "Riverside Athletic", 2009),
    (18, "Hugo Lemaire", Position::Midfielder, "Eastfield United", 2008),
    (7, "Kai Nakamura", Position::Forward, "Lakeshore SC", 2008),
    (9, "Diego Salcedo", Position::Forward, "Harbor City Academy", 2008),
    (11, "Malik Benali", Position::Forward, "Westbrook Rovers", 2009),
    (19, "Finn Gallagher", Position::Forward, "Northgate FC U18", 2009),
    (20, "Andrés Paredes", Position::Forward, "Riverside Athletic", 2008),
];
