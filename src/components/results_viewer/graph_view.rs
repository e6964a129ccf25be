//! Graph tab: SVG rendering of the projected graph. Layout comes fully
//! positioned from the core, so this is plain markup plus a click-to-inspect
//! tooltip.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::query::graph::{GraphModel, GraphNode, NodeKind};

#[component]
pub fn GraphTab(graph: GraphModel) -> impl IntoView {
	let selected = RwSignal::new(None::<GraphNode>);
	let node_count = graph.nodes.len();
	let edge_count = graph.edges.len();

	let positions: HashMap<String, (f64, f64)> = graph
		.nodes
		.iter()
		.map(|node| (node.key.clone(), (node.x, node.y)))
		.collect();

	let edges = graph
		.edges
		.iter()
		.filter_map(|edge| {
			// skip edges whose endpoints are missing from the node set
			let (x1, y1) = positions.get(&edge.from)?;
			let (x2, y2) = positions.get(&edge.to)?;
			Some(view! {
				<line
					x1=x1.to_string()
					y1=y1.to_string()
					x2=x2.to_string()
					y2=y2.to_string()
					stroke="#cccccc"
					stroke-width="1"
					opacity="0.6"
				/>
			})
		})
		.collect_view();

	let nodes = graph
		.nodes
		.iter()
		.map(|node| {
			let for_click = node.clone();
			let shape = match node.kind {
				NodeKind::Uri => {
					view! {
						<circle
							cx=node.x.to_string()
							cy=node.y.to_string()
							r="8"
							fill="#009688"
							stroke="#fff"
							stroke-width="2"
							class="graph-shape"
							on:click=move |_| selected.set(Some(for_click.clone()))
						/>
					}
						.into_any()
				}
				NodeKind::Literal => {
					view! {
						<rect
							x=(node.x - 10.0).to_string()
							y=(node.y - 6.0).to_string()
							width="20"
							height="12"
							fill="#FFC107"
							stroke="#fff"
							stroke-width="2"
							class="graph-shape"
							on:click=move |_| selected.set(Some(for_click.clone()))
						/>
					}
						.into_any()
				}
			};
			view! {
				<g>
					{shape}
					<text
						x=node.x.to_string()
						y=(node.y + 20.0).to_string()
						text-anchor="middle"
						class="graph-label"
					>
						{node.label.clone()}
					</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<div class="graph-tab">
			<div class="graph-meta">
				<span>{format!("{node_count} nodos, {edge_count} conexiones")}</span>
				<div class="graph-legend">
					<span class="legend-dot"></span>
					<span>"URIs"</span>
					<span class="legend-box"></span>
					<span>"Literales"</span>
				</div>
			</div>

			<div class="graph-canvas">
				<svg attr:viewBox="0 0 800 400">{edges}{nodes}</svg>
				{move || {
					selected
						.get()
						.map(|node| {
							view! {
								<div class="graph-tooltip">
									<div class="tooltip-label">{node.label.clone()}</div>
									<div class="tooltip-value">{node.key.clone()}</div>
									<button class="tooltip-close" on:click=move |_| selected.set(None)>
										"×"
									</button>
								</div>
							}
						})
				}}
			</div>
		</div>
	}
}
