use bem_schedule::{ScheduleType, ScheduleTypeRegistry, ScheduleTypeResult};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bem-cli")]
#[command(about = "bem CLI - schedule type registry inspection tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List component classes with registered schedule slots
    Classes,
    /// List the schedule slots of a component class
    Slots {
        /// Component class name (e.g. RefrigerationCase)
        class_name: String,
    },
    /// Show one schedule slot in full
    Show {
        /// Component class name
        class_name: String,
        /// Slot display name (exact, e.g. "Case Defrost Drip-Down")
        display_name: String,
    },
}

fn main() -> ScheduleTypeResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let registry = ScheduleTypeRegistry::builtin();

    match cli.command {
        Commands::Classes => cmd_classes(registry),
        Commands::Slots { class_name } => cmd_slots(registry, &class_name),
        Commands::Show {
            class_name,
            display_name,
        } => cmd_show(registry, &class_name, &display_name),
    }
}

fn cmd_classes(registry: &ScheduleTypeRegistry) -> ScheduleTypeResult<()> {
    println!("Registered classes:");
    for class_name in registry.class_names() {
        let slots = registry.types_for_class(class_name).count();
        println!("  {} ({} slots)", class_name, slots);
    }
    Ok(())
}

fn cmd_slots(registry: &ScheduleTypeRegistry, class_name: &str) -> ScheduleTypeResult<()> {
    let mut found = false;
    for st in registry.types_for_class(class_name) {
        if !found {
            println!("Slots of {}:", class_name);
            found = true;
        }
        println!(
            "  {} - {} {}, {}",
            st.display_name,
            st.numeric_type(),
            st.unit_type,
            bounds_label(st)
        );
    }
    if !found {
        println!("No schedule slots registered for class: {}", class_name);
    }
    Ok(())
}

fn cmd_show(
    registry: &ScheduleTypeRegistry,
    class_name: &str,
    display_name: &str,
) -> ScheduleTypeResult<()> {
    let st = registry.find(class_name, display_name)?;

    println!("{} / {}", st.class_name, st.display_name);
    println!("  Relationship: {}", st.relationship_name);
    println!("  Numeric type: {}", st.numeric_type());
    println!("  Unit type:    {}", st.unit_type);
    println!("  Bounds:       {}", bounds_label(st));
    Ok(())
}

fn bounds_label(st: &ScheduleType) -> String {
    match (st.lower_limit, st.upper_limit) {
        (Some(lo), Some(hi)) => format!("[{}, {}]", lo, hi),
        (Some(lo), None) => format!("[{}, unbounded)", lo),
        (None, Some(hi)) => format!("(unbounded, {}]", hi),
        (None, None) => "unbounded".to_string(),
    }
}
