use super::views::{CategoryShareEntry, FootprintInsights, FootprintLevel, MetricExplanations};
use super::WORLD_AVERAGE_GHA;
use crate::quiz::category::Category;
use crate::quiz::scoring::CalculationResult;

const MAX_ACTIONS: usize = 3;

pub const REFLECTIVE_QUESTIONS: [&str; 5] = [
    "Analiza tus resultados: ¿Cuál es la categoría que más contribuye a tu huella ecológica y qué hábitos específicos (identificados en el cuestionario) influyen en ello?",
    "Investiga y explica: ¿Cómo se relaciona tu 'Día de Sobrecapacidad' personal con el concepto de límites planetarios y biocapacidad?",
    "Propuesta de mejora: Si tuvieras que reducir tu huella a la mitad en los próximos 6 meses, ¿qué sacrificios o cambios tecnológicos necesitarías implementar?",
    "Perspectiva sistémica: ¿Qué barreras infraestructurales o sociales en tu ciudad te impiden tener una huella ecológica más baja (ej. falta de ciclovías, transporte público deficiente)?",
    "Conclusión ética: Teniendo en cuenta que la biocapacidad per cápita global es ~1.6 gha, ¿consideras ético tu nivel de consumo actual? Justifica tu respuesta.",
];

pub const METRIC_EXPLANATIONS: MetricExplanations = MetricExplanations {
    gha: "La Huella Ecológica se mide en hectáreas globales (gha). Representa el área biológicamente productiva necesaria para proporcionar todo lo que consumes (alimentos, fibra, madera) y para absorber el dióxido de carbono que emites. La media global es 2.7 gha, pero para ser sostenible deberíamos estar bajo 1.6 gha.",
    earths: "El número de Tierras indica cuántos planetas serían necesarios si toda la humanidad viviera con tu estilo de vida. Si es mayor a 1, estás viviendo en 'déficit ecológico', consumiendo recursos más rápido de lo que la Tierra puede regenerarlos.",
    co2: "Tu huella de carbono mide la cantidad total de gases de efecto invernadero (expresada en toneladas de CO2) causadas directa o indirectamente por tus actividades. Es el componente que más rápido crece en la huella ecológica global.",
    overshoot: "El Día de Sobrecapacidad es la fecha aproximada en la que habrías agotado tu 'presupuesto ecológico' anual. A partir de esa fecha, estás operando en números rojos, consumiendo el capital natural de las futuras generaciones.",
};

fn actions_for(category: Category) -> [&'static str; 2] {
    match category {
        Category::Food => [
            "Reemplaza la carne roja por legumbres al menos tres días por semana.",
            "Compra en mercados locales y prioriza productos de temporada.",
        ],
        Category::Housing => [
            "Cambia a iluminación LED y desconecta equipos en reposo para bajar el recibo de luz.",
            "Reduce el uso de terma eléctrica con duchas más cortas.",
        ],
        Category::Transport => [
            "Usa transporte público, bicicleta o camina para los trayectos diarios.",
            "Comparte el auto y evita vuelos cortos cuando exista alternativa terrestre.",
        ],
        Category::Goods => [
            "Compra ropa de segunda mano y repara antes de reemplazar.",
            "Extiende la vida útil de tu smartphone y laptop más allá de cuatro años.",
        ],
        Category::Services => [
            "Separa plásticos, papel, vidrio y orgánicos para reciclaje.",
            "Reduce los residuos no reciclables evitando productos de un solo uso.",
        ],
    }
}

pub(crate) fn generate_insights(
    result: &CalculationResult,
    shares: &[CategoryShareEntry],
    biocapacity_per_person: f64,
) -> FootprintInsights {
    let level = if !result.exceeds_biocapacity(biocapacity_per_person) {
        FootprintLevel::Sustainable
    } else if result.total_gha <= WORLD_AVERAGE_GHA {
        FootprintLevel::AboveBiocapacity
    } else {
        FootprintLevel::AboveWorldAverage
    };

    let dominant_category = result.dominant_category();

    let mut observations = vec![format!(
        "Tu huella de {:.2} gha equivale a {:.1} planetas.",
        result.total_gha, result.number_earths
    )];
    if level == FootprintLevel::Sustainable {
        observations.push(
            "Tu consumo se mantiene dentro de la biocapacidad disponible todo el año.".to_string(),
        );
    } else {
        observations.push(format!(
            "Agotas tu presupuesto ecológico anual el {}.",
            result.overshoot_date
        ));
    }
    if let Some(entry) = dominant_category
        .and_then(|category| shares.iter().find(|entry| entry.category == category))
    {
        observations.push(format!(
            "{} aporta el {:.1}% de tu huella.",
            entry.category_label, entry.share_pct
        ));
    }

    let mut ranked: Vec<&CategoryShareEntry> =
        shares.iter().filter(|entry| entry.gha > 0.0).collect();
    // Stable sort keeps category order for equal subtotals.
    ranked.sort_by(|a, b| b.gha.total_cmp(&a.gha));

    let recommended_actions = ranked
        .into_iter()
        .take(2)
        .flat_map(|entry| actions_for(entry.category))
        .take(MAX_ACTIONS)
        .collect();

    FootprintInsights {
        level,
        level_label: level.label(),
        dominant_category,
        observations,
        recommended_actions,
        reflective_questions: REFLECTIVE_QUESTIONS.to_vec(),
    }
}
