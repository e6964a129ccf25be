//! Keyword-to-template table behind the "assistant" panel.
//!
//! This is deliberately a dumb rule table, not language understanding: the
//! first rule with a keyword contained in the lowercased input wins, and
//! anything unmatched falls through to a generic culture query. The table is
//! data, so swapping it for a real model integration later only touches this
//! module.

pub struct QueryRule {
	pub keywords: &'static [&'static str],
	pub template: &'static str,
}

const PREFIXES: &str = "PREFIX wd: <http://www.wikidata.org/entity/>\n\
PREFIX wdt: <http://www.wikidata.org/prop/direct/>\n\
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>\n";

pub const FESTIVAL_TEMPLATE: &str = "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?festival ?festivalLabel ?lugar ?lugarLabel ?fecha WHERE {
  ?festival wdt:P31/wdt:P279* wd:Q132241 .
  ?festival wdt:P17 wd:Q736 .
  OPTIONAL { ?festival wdt:P276 ?lugar }
  OPTIONAL { ?festival wdt:P585 ?fecha }
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 50";

pub const FOOD_TEMPLATE: &str = "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?plato ?platoLabel ?origen ?origenLabel WHERE {
  ?plato wdt:P31/wdt:P279* wd:Q746549 .
  ?plato wdt:P495 wd:Q736 .
  OPTIONAL { ?plato wdt:P276 ?origen }
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 30";

pub const MUSIC_TEMPLATE: &str = "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?artista ?artistaLabel ?genero ?generoLabel WHERE {
  ?artista wdt:P31 wd:Q5 .
  ?artista wdt:P27 wd:Q736 .
  ?artista wdt:P136 ?genero .
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 40";

pub const FALLBACK_TEMPLATE: &str = "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?item ?itemLabel ?tipo ?tipoLabel WHERE {
  ?item wdt:P17 wd:Q736 .
  ?item wdt:P31 ?tipo .
  FILTER(?tipo IN (wd:Q132241, wd:Q746549, wd:Q188451, wd:Q570116))
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 50";

pub const RULES: &[QueryRule] = &[
	QueryRule {
		keywords: &["festival", "fiesta", "celebracion", "celebración"],
		template: FESTIVAL_TEMPLATE,
	},
	QueryRule {
		keywords: &["comida", "plato", "gastronomia", "gastronomía"],
		template: FOOD_TEMPLATE,
	},
	QueryRule {
		keywords: &["musica", "música", "cancion", "canción", "artista"],
		template: MUSIC_TEMPLATE,
	},
];

/// Picks the template for a free-text description.
pub fn generate_query(description: &str) -> &'static str {
	let text = description.to_lowercase();
	RULES
		.iter()
		.find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
		.map(|rule| rule.template)
		.unwrap_or(FALLBACK_TEMPLATE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keywords_pick_their_template() {
		assert_eq!(
			generate_query("Buscar festividades religiosas: la Fiesta de la Mama Negra"),
			FESTIVAL_TEMPLATE
		);
		assert_eq!(generate_query("platos típicos de la sierra"), FOOD_TEMPLATE);
		assert_eq!(generate_query("ARTISTAS de pasillo"), MUSIC_TEMPLATE);
	}

	#[test]
	fn unmatched_text_falls_back() {
		assert_eq!(generate_query("volcanes del Ecuador"), FALLBACK_TEMPLATE);
	}

	#[test]
	fn templates_share_the_prefix_block() {
		for template in [
			FESTIVAL_TEMPLATE,
			FOOD_TEMPLATE,
			MUSIC_TEMPLATE,
			FALLBACK_TEMPLATE,
		] {
			assert!(template.starts_with(PREFIXES.trim_end_matches('\n')));
		}
	}
}
