use nestcut::{
    composite_layers, export_document, init_logging, DesignerState, LayerConfig,
    EXPORT_PADDING_IN,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    // Run the pipeline on the starter design and emit the cut file.
    let state = DesignerState::new();
    let nests = state.nests();
    info!(nests = nests.len(), "generated nest sequence");

    let layers = composite_layers(nests, &LayerConfig::default());
    info!(layers = layers.len(), "composited rib layers for preview");

    if let Some(svg) = export_document(nests, EXPORT_PADDING_IN) {
        print!("{}", svg);
    }

    Ok(())
}
