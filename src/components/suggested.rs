//! Curated query catalog for the sidebar, grouped by category.

use leptos::prelude::*;

struct SuggestedQuery {
	title: &'static str,
	description: &'static str,
	category: &'static str,
	query: &'static str,
}

const SUGGESTED: &[SuggestedQuery] = &[
	SuggestedQuery {
		title: "Festividades en Loja",
		description: "Festividades y celebraciones en la provincia de Loja",
		category: "Festividades",
		query: "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?festival ?festivalLabel ?lugar ?lugarLabel ?fecha WHERE {
  ?festival wdt:P31/wdt:P279* wd:Q132241 .
  ?festival wdt:P276 ?lugar .
  ?lugar wdt:P131* wd:Q499085 .
  OPTIONAL { ?festival wdt:P585 ?fecha }
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 50",
	},
	SuggestedQuery {
		title: "Gastronomía Ecuatoriana",
		description: "Platos típicos y tradiciones culinarias del Ecuador",
		category: "Gastronomía",
		query: "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?plato ?platoLabel ?origen ?origenLabel ?ingredientes WHERE {
  ?plato wdt:P31/wdt:P279* wd:Q746549 .
  ?plato wdt:P495 wd:Q736 .
  OPTIONAL { ?plato wdt:P276 ?origen }
  OPTIONAL { ?plato wdt:P527 ?ingredientes }
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 30",
	},
	SuggestedQuery {
		title: "Patrimonio Cultural",
		description: "Sitios y elementos del patrimonio cultural ecuatoriano",
		category: "Patrimonio",
		query: "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?patrimonio ?patrimonioLabel ?tipo ?tipoLabel ?ubicacion ?ubicacionLabel WHERE {
  ?patrimonio wdt:P1435 ?tipo .
  ?patrimonio wdt:P17 wd:Q736 .
  OPTIONAL { ?patrimonio wdt:P276 ?ubicacion }
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 40",
	},
	SuggestedQuery {
		title: "Música Tradicional",
		description: "Géneros musicales y artistas tradicionales del Ecuador",
		category: "Música",
		query: "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?genero ?generoLabel ?artista ?artistaLabel WHERE {
  {
    ?genero wdt:P31/wdt:P279* wd:Q188451 .
    ?genero wdt:P495 wd:Q736 .
  } UNION {
    ?artista wdt:P31 wd:Q5 .
    ?artista wdt:P27 wd:Q736 .
    ?artista wdt:P136 ?genero .
    ?genero wdt:P31/wdt:P279* wd:Q188451 .
  }
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 35",
	},
	SuggestedQuery {
		title: "Lugares Turísticos",
		description: "Destinos y atracciones turísticas principales del Ecuador",
		category: "Turismo",
		query: "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?lugar ?lugarLabel ?provincia ?provinciaLabel ?coordenadas WHERE {
  ?lugar wdt:P31/wdt:P279* wd:Q570116 .
  ?lugar wdt:P17 wd:Q736 .
  OPTIONAL { ?lugar wdt:P131 ?provincia }
  OPTIONAL { ?lugar wdt:P625 ?coordenadas }
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 50",
	},
	SuggestedQuery {
		title: "Personajes Históricos",
		description: "Figuras importantes en la historia y cultura del Ecuador",
		category: "Historia",
		query: "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?persona ?personaLabel ?ocupacion ?ocupacionLabel ?nacimiento ?muerte WHERE {
  ?persona wdt:P31 wd:Q5 .
  ?persona wdt:P27 wd:Q736 .
  ?persona wdt:P106 ?ocupacion .
  OPTIONAL { ?persona wdt:P569 ?nacimiento }
  OPTIONAL { ?persona wdt:P570 ?muerte }
  SERVICE wikibase:label { bd:serviceParam wikibase:language \"es,en\" }
}
LIMIT 40",
	},
];

fn categories() -> Vec<&'static str> {
	let mut seen = Vec::new();
	for entry in SUGGESTED {
		if !seen.contains(&entry.category) {
			seen.push(entry.category);
		}
	}
	seen
}

#[component]
pub fn SuggestedQueries(query: RwSignal<String>) -> impl IntoView {
	view! {
		<div class="card sidebar-card">
			<div class="card-header">
				<span class="card-title">"Consultas Sugeridas"</span>
			</div>
			{categories()
				.into_iter()
				.map(|category| {
					view! {
						<div class="suggested-group">
							<h4 class="suggested-category">{category}</h4>
							{SUGGESTED
								.iter()
								.filter(|entry| entry.category == category)
								.map(|entry| {
									view! {
										<button
											class="suggested-item"
											on:click=move |_| query.set(entry.query.to_string())
										>
											<div class="suggested-title">{entry.title}</div>
											<div class="suggested-description">{entry.description}</div>
										</button>
									}
								})
								.collect_view()}
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
