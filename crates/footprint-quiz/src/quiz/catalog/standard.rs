use super::{AnswerOption, Question};
use crate::quiz::category::Category;

fn question(
    id: &str,
    category: Category,
    prompt: &str,
    options: &[(&str, f64)],
) -> Question {
    Question::new(
        id,
        category,
        prompt,
        options
            .iter()
            .map(|(label, weight)| AnswerOption::new(*label, *weight))
            .collect(),
    )
}

pub(super) fn standard_questions() -> Vec<Question> {
    vec![
        // Alimentación, roughly 25-30% of a typical total.
        question(
            "food_diet_frequency",
            Category::Food,
            "¿Con qué frecuencia consumes productos de origen animal (carne, pescado, huevos, lácteos)?",
            &[
                ("Diariamente (7 días a la semana, en casi todas las comidas)", 0.9),
                ("Frecuente (4-6 días a la semana, al menos una vez al día)", 0.6),
                ("Moderado (2-3 días a la semana)", 0.4),
                ("Ocasional (1 vez por semana o menos - Flexitariano)", 0.2),
                ("Nunca (Vegano estricto)", 0.05),
            ],
        ),
        question(
            "food_meat_type",
            Category::Food,
            "En tu consumo semanal promedio de proteínas, ¿cuál es la fuente predominante?",
            &[
                ("Carne roja (Res, cordero) - Alta intensidad de carbono", 0.8),
                ("Carne blanca (Pollo, cerdo, pavo)", 0.4),
                ("Pescado y mariscos", 0.3),
                ("Proteína vegetal (Legumbres, tofu) o No consumo carne", 0.0),
            ],
        ),
        question(
            "food_origin",
            Category::Food,
            "¿Qué porcentaje de tus alimentos estimas que son productos locales (no importados, de temporada)?",
            &[
                ("Menos del 20% (Mayoría de supermercado / importados)", 0.5),
                ("Entre 20% y 60% (Mezcla balanceada)", 0.3),
                ("Más del 60% (Mercados locales, productos de temporada)", 0.1),
            ],
        ),
        question(
            "food_processed",
            Category::Food,
            "¿Qué tipo de alimentos predominan en tu dieta diaria?",
            &[
                ("Alimentos procesados/empacados y comida rápida (>5 veces/semana)", 0.6),
                ("Balanceado entre frescos y procesados", 0.3),
                ("Alimentos frescos, no procesados y cocina en casa", 0.1),
            ],
        ),
        // Vivienda, roughly 20%.
        question(
            "housing_type",
            Category::Housing,
            "Selecciona la descripción que mejor se ajuste a tu vivienda habitual:",
            &[
                ("Casa independiente grande (>150 m²)", 0.8),
                ("Departamento o casa mediana (80 - 150 m²)", 0.5),
                ("Departamento pequeño o vivienda social (40 - 80 m²)", 0.3),
                ("Minidepartamento, estudio o habitación (<40 m²)", 0.1),
            ],
        ),
        question(
            "housing_material",
            Category::Housing,
            "¿Cuál es el material de construcción predominante de tu vivienda?",
            &[
                ("Ladrillo, Cemento Armado (Alta energía incorporada)", 0.3),
                ("Madera (Certificada o tratada)", 0.2),
                ("Adobe, Quincha o Tapial (Baja energía incorporada)", 0.1),
            ],
        ),
        question(
            "housing_people",
            Category::Housing,
            "¿Cuántas personas residen permanentemente en tu hogar (incluyéndote)?",
            &[
                ("1 persona (Solo yo)", 0.6),
                ("2 personas", 0.4),
                ("3-4 personas", 0.2),
                ("5 o más personas", 0.1),
            ],
        ),
        question(
            "housing_electricity",
            Category::Housing,
            "¿Cuál es el promedio mensual aproximado de tu recibo de luz?",
            &[
                ("Alto (> S/ 250 soles) - Uso intensivo de terma/AC", 0.6),
                ("Medio (S/ 100 - S/ 250 soles)", 0.3),
                ("Bajo (< S/ 100 soles) - Uso eficiente", 0.1),
                ("Muy bajo (Uso de paneles solares o sin conexión)", 0.0),
            ],
        ),
        // Transporte, roughly 20-25%.
        question(
            "transport_distance",
            Category::Transport,
            "¿Cuántos kilómetros recorres en promedio semanalmente en transporte privado (auto/moto)?",
            &[
                ("> 250 km (Largas distancias diarias)", 0.8),
                ("100 - 250 km", 0.5),
                ("10 - 100 km", 0.2),
                ("< 10 km (Casi nulo)", 0.0),
            ],
        ),
        question(
            "transport_mode",
            Category::Transport,
            "¿Cuál es tu medio de transporte principal (>50% de tus viajes)?",
            &[
                ("Auto particular (Gasolina/Diesel)", 1.2),
                ("Motocicleta", 0.6),
                ("Transporte Público (Bus, Combi, Tren)", 0.3),
                ("No motorizado (Bicicleta, Scooter eléctrico, Caminando)", 0.0),
            ],
        ),
        question(
            "transport_carpool",
            Category::Transport,
            "Cuando viajas en auto (propio o taxi), ¿cuántas personas viajan habitualmente?",
            &[
                ("Solo yo (o solo el conductor y yo)", 0.4),
                ("2-3 personas", 0.2),
                ("4+ personas (Auto lleno) o No uso auto", 0.0),
            ],
        ),
        question(
            "transport_flights",
            Category::Transport,
            "¿Cuántas horas de vuelo has realizado en los últimos 12 meses?",
            &[
                ("> 20 horas (Varios intercontinentales)", 1.5),
                ("10 - 20 horas (1-2 viajes largos)", 1.0),
                ("2 - 10 horas (Vuelos nacionales)", 0.5),
                ("0 horas (Ningún vuelo)", 0.0),
            ],
        ),
        // Bienes, roughly 15%.
        question(
            "goods_clothing",
            Category::Goods,
            "¿Cuántas prendas de ropa o calzado nuevas adquieres al mes?",
            &[
                ("> 4 prendas al mes (Fast Fashion)", 0.6),
                ("1-3 prendas al mes", 0.3),
                ("Esporádicamente (3-4 veces al año)", 0.1),
                ("Casi nunca / Solo Segunda mano", 0.05),
            ],
        ),
        question(
            "goods_electronics",
            Category::Goods,
            "¿Con qué frecuencia renuevas tu Smartphone o Laptop?",
            &[
                ("Cada 12-18 meses", 0.5),
                ("Cada 2-3 años", 0.3),
                ("Solo cuando se malogra irremediablemente (>4 años)", 0.1),
            ],
        ),
        question(
            "goods_spending",
            Category::Goods,
            "En comparación con un estudiante promedio, ¿cómo evalúas tu adquisición de bienes materiales (gadgets, accesorios, decoración)?",
            &[
                ("Muy superior (Comprador frecuente)", 0.4),
                ("Promedio", 0.2),
                ("Minimalista (Solo lo esencial)", 0.1),
            ],
        ),
        // Servicios, roughly 10-15%.
        question(
            "services_trash",
            Category::Services,
            "¿Cuál es el volumen aproximado de residuos no reciclables que genera tu hogar a la semana?",
            &[
                ("Grande (> 3 bolsas de 50L llenas)", 0.4),
                ("Medio (1-2 bolsas de 50L)", 0.2),
                ("Pequeño (< 1 bolsa) - Alta eficiencia", 0.1),
            ],
        ),
        question(
            "services_recycling",
            Category::Services,
            "¿Qué porcentaje de tus residuos clasificas correctamente para reciclaje?",
            &[
                ("0% (Todo va a la basura común)", 0.3),
                ("50% (Separo botellas y cartón a veces)", 0.1),
                ("100% (Separo plásticos, papel, vidrio y orgánicos)", 0.0),
            ],
        ),
    ]
}
