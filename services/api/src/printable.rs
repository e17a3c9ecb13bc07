use chrono::NaiveDate;
use footprint_quiz::quiz::report::REFLECTIVE_QUESTIONS;
use footprint_quiz::quiz::{ScoreResponse, StudentProfile};
use std::fmt::{self, Write};

const COURSE_NAME: &str = "Curso de Ecología y Medio Ambiente";
const PROFESSOR_NAME: &str = "MSc. Alvaro Christiam Silva Espejo";
const NO_ANSWER: &str = "Sin respuesta...";

/// Plain-text report laid out for printing or saving as PDF.
pub(crate) fn render_footprint_report(
    response: &ScoreResponse,
    profile: Option<&StudentProfile>,
    issued_on: NaiveDate,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, response, profile, issued_on)?;
    Ok(out)
}

fn write_report(
    out: &mut String,
    response: &ScoreResponse,
    profile: Option<&StudentProfile>,
    issued_on: NaiveDate,
) -> fmt::Result {
    let ScoreResponse {
        result,
        report,
        reflective_answers,
        ..
    } = response;

    writeln!(out, "Reporte de Huella Ecológica")?;
    writeln!(out, "{COURSE_NAME}")?;
    writeln!(out, "Fecha: {}", issued_on.format("%d/%m/%Y"))?;
    writeln!(out, "Docente: {PROFESSOR_NAME}")?;

    if let Some(profile) = profile {
        writeln!(out, "\nI. Datos del estudiante")?;
        writeln!(out, "- Nombre: {}", profile.name)?;
        writeln!(out, "- Código: {}", profile.student_code)?;
        if !profile.course_cycle.trim().is_empty() {
            writeln!(out, "- Ciclo: {}", profile.course_cycle)?;
        }
        writeln!(out, "- Escuela profesional: {}", profile.professional_school)?;
    }

    let explanations = &report.metric_explanations;
    writeln!(out, "\nII. Indicadores")?;
    writeln!(out, "- Huella ecológica: {:.2} gha", result.total_gha)?;
    writeln!(out, "  {}", explanations.gha)?;
    writeln!(out, "- Planetas necesarios: {:.1}", result.number_earths)?;
    writeln!(out, "  {}", explanations.earths)?;
    writeln!(out, "- Emisiones CO2: {:.2} t/año", result.carbon_footprint)?;
    writeln!(out, "  {}", explanations.co2)?;
    writeln!(out, "- Día de sobrecapacidad: {}", result.overshoot_date)?;
    writeln!(out, "  {}", explanations.overshoot)?;
    writeln!(out, "- Nivel: {}", report.insights.level_label)?;

    writeln!(out, "\nIII. Desglose por categoría")?;
    for entry in &report.category_shares {
        writeln!(
            out,
            "- {}: {:.2} gha ({:.1}%)",
            entry.category_label, entry.gha, entry.share_pct
        )?;
    }

    writeln!(out, "\nComparación")?;
    for benchmark in &report.benchmarks {
        writeln!(out, "- {}: {:.2} gha", benchmark.label, benchmark.gha)?;
    }

    if !report.insights.observations.is_empty() {
        writeln!(out, "\nObservaciones")?;
        for note in &report.insights.observations {
            writeln!(out, "- {note}")?;
        }
    }

    if !report.insights.recommended_actions.is_empty() {
        writeln!(out, "\nAcciones recomendadas")?;
        for action in &report.insights.recommended_actions {
            writeln!(out, "- {action}")?;
        }
    }

    writeln!(out, "\nIV. Cuestionario reflexivo")?;
    for (index, question) in REFLECTIVE_QUESTIONS.iter().enumerate() {
        let answer = reflective_answers
            .get(&index)
            .map(String::as_str)
            .unwrap_or(NO_ANSWER);
        writeln!(out, "{}. {}", index + 1, question)?;
        writeln!(out, "   {answer}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint_quiz::quiz::{FootprintService, QuestionCatalog, ScoreRequest, ScoringConfig};
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn issued_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 9).expect("valid date")
    }

    #[test]
    fn report_lists_profile_metrics_and_reflections() {
        let service = FootprintService::new(
            Arc::new(QuestionCatalog::standard()),
            ScoringConfig::default(),
        );
        let profile = StudentProfile::new("Ana Quispe", "2024-117");
        let response = service
            .score(ScoreRequest {
                answers: QuestionCatalog::standard().maximum_answers(),
                year: Some(2025),
                profile: Some(profile.clone()),
                reflective_answers: BTreeMap::from([(1, "Consumo antes de regenerar.".to_string())]),
            })
            .expect("scoring succeeds");

        let text =
            render_footprint_report(&response, Some(&profile), issued_on()).expect("renders");

        assert!(text.contains("Fecha: 09/06/2025"));
        assert!(text.contains(&format!("Docente: {PROFESSOR_NAME}")));
        assert!(text.contains("- Nombre: Ana Quispe"));
        assert!(text.contains("- Huella ecológica: 11.20 gha"));
        assert!(text.contains(response.report.metric_explanations.earths));
        assert!(text.contains("- Día de sobrecapacidad: 21 Feb"));
        assert!(text.contains("- Transporte: 3.90 gha"));
        assert!(text.contains("5. Conclusión ética"));
        assert!(text.contains("   Consumo antes de regenerar."));
        assert_eq!(text.matches(NO_ANSWER).count(), 4);
    }
}
