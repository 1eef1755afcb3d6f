// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! National team names.

use std::borrow::Cow;

/// English name and Italian name, in the order the admin form lists them.
const NATIONAL_TEAM_NAMES: &[(&str, &str)] = &[
	("Italy", "Italia"),
	("Argentina", "Argentina"),
	("Austria", "Austria"),
	("Belgium", "Belgio"),
	("Brazil", "Brasile"),
	("Bulgaria", "Bulgaria"),
	("Cameroon", "Camerun"),
	("Chile", "Cile"),
	("Colombia", "Colombia"),
	("Croatia", "Croazia"),
	("Czech Republic", "Repubblica Ceca"),
	("Denmark", "Danimarca"),
	("England", "Inghilterra"),
	("Finland", "Finlandia"),
	("France", "Francia"),
	("Germany", "Germania"),
	("West Germany", "Germania Ovest"),
	("Ghana", "Ghana"),
	("Greece", "Grecia"),
	("Hungary", "Ungheria"),
	("Iceland", "Islanda"),
	("Ivory Coast", "Costa d'Avorio"),
	("Japan", "Giappone"),
	("Mexico", "Messico"),
	("Morocco", "Marocco"),
	("Netherlands", "Olanda"),
	("Nigeria", "Nigeria"),
	("Northern Ireland", "Irlanda del Nord"),
	("Norway", "Norvegia"),
	("Peru", "Perù"),
	("Poland", "Polonia"),
	("Portugal", "Portogallo"),
	("Republic of Ireland", "Irlanda"),
	("Romania", "Romania"),
	("Russia", "Russia"),
	("Scotland", "Scozia"),
	("Senegal", "Senegal"),
	("Serbia", "Serbia"),
	("South Korea", "Corea del Sud"),
	("Soviet Union", "Unione Sovietica"),
	("Spain", "Spagna"),
	("Sweden", "Svezia"),
	("Switzerland", "Svizzera"),
	("Turkey", "Turchia"),
	("Ukraine", "Ucraina"),
	("United States", "Stati Uniti"),
	("Uruguay", "Uruguay"),
	("Wales", "Galles"),
	("Yugoslavia", "Jugoslavia"),
];

/// Alternative spellings that resolve to an entry above.
const ALIASES: &[(&str, &str)] = &[
	("holland", "Netherlands"),
	("ireland", "Republic of Ireland"),
	("usa", "United States"),
	("ussr", "Soviet Union"),
	("korea republic", "South Korea"),
	("côte d'ivoire", "Ivory Coast"),
];

/// English national team names offered by the admin form.
pub const NATIONAL_TEAMS: &[&str] = &[
	"Italy",
	"Argentina",
	"Austria",
	"Belgium",
	"Brazil",
	"Bulgaria",
	"Cameroon",
	"Chile",
	"Colombia",
	"Croatia",
	"Czech Republic",
	"Denmark",
	"England",
	"Finland",
	"France",
	"Germany",
	"West Germany",
	"Ghana",
	"Greece",
	"Hungary",
	"Iceland",
	"Ivory Coast",
	"Japan",
	"Mexico",
	"Morocco",
	"Netherlands",
	"Nigeria",
	"Northern Ireland",
	"Norway",
	"Peru",
	"Poland",
	"Portugal",
	"Republic of Ireland",
	"Romania",
	"Russia",
	"Scotland",
	"Senegal",
	"Serbia",
	"South Korea",
	"Soviet Union",
	"Spain",
	"Sweden",
	"Switzerland",
	"Turkey",
	"Ukraine",
	"United States",
	"Uruguay",
	"Wales",
	"Yugoslavia",
];

/// Italian name of a national team.
///
/// Matching ignores case and surrounding whitespace. Names that are not
/// national teams, or are already Italian, come back unchanged.
pub fn national_team_it(name: &str) -> Cow<'_, str> {
	let key = name.trim().to_lowercase();
	if key.is_empty() {
		return Cow::Borrowed(name);
	}

	let english = ALIASES
		.iter()
		.find(|(alias, _)| *alias == key)
		.map(|(_, english)| english.to_lowercase())
		.unwrap_or(key);

	NATIONAL_TEAM_NAMES
		.iter()
		.find(|(en, _)| en.to_lowercase() == english)
		.map(|(_, it)| Cow::Borrowed(*it))
		.unwrap_or(Cow::Borrowed(name))
}
