//! # Built-in Election Catalog
//!
//! File: cli/src/chat/catalog.rs
//!
//! The compiled-in intent table for the UEMASUL Reitor/Vice-Reitor election,
//! together with the default persona strings. A configuration file may replace
//! any of these (see `core::config`).
//!
//! Declaration order below is match precedence. For example, "Como funciona o
//! peso do meu voto?" is answered by `regras` (trigger "funciona") rather than
//! `peso_voto`, because `regras` comes first.
//!
use crate::chat::intent::Intent;

/// Name the bot answers as.
pub const DEFAULT_BOT_NAME: &str = "Yve";

/// Opening message shown at the start of an interactive session.
pub const DEFAULT_GREETING: &str =
    "🤖 Olá! Sou a Yve. Pergunte algo sobre a eleição para Reitor(a) e Vice-Reitor(a) da UEMASUL.";

/// Reply used when no intent matches. The leading ❌ marks it as a rejection.
pub const DEFAULT_FALLBACK: &str =
    "❌ Esta pergunta não está relacionada às eleições de Reitor e Vice-Reitor. Reformule por favor.";

const CANDIDATOS: &str = "🗳️ Os candidatos são:

Chapa 1 - Renovação e Diálogo
Reitor: Prof. Dr. João Silva
Vice-Reitora: Profa. Dra. Maria Santos

Chapa 2 - Universidade para o Futuro
Reitora: Profa. Dra. Ana Oliveira
Vice-Reitor: Prof. Dr. Carlos Pereira";

const REGRAS: &str = "📘 Regras principais:
- Voto eletrônico e secreto
- Uma única fase de votação
- Registro de chapas até 30 dias antes
- Apenas membros ativos podem votar";

const QUEM_PODE_VOTAR: &str = "✅ Têm direito a voto:
- Docentes ativos
- Técnicos-administrativos
- Estudantes matriculados (graduação e pós)";

const PESO_VOTO: &str = "⚖️ Peso dos votos:
- Docentes: 70%
- Técnicos-administrativos: 15%
- Estudantes: 15%";

const DATA_ELEICAO: &str = "🗓️ A eleição será no dia 09 de outubro de 2025.";

const COMO_VOTAR: &str = "📍 A votação será realizada por meio do Sistema SIGEleição, integrado ao SIGAA:
1. Acesse o site sigeleicao.uemasul.edu.br com sua conta SIGAA ou SIPAC
2. Escolha a eleição na lista de eleições abertas
3. Veja as chapas e candidatos
4. Vote na cabine virtual semelhante à urna eletrônica";

/// The default catalog, in precedence order.
pub fn default_intents() -> Vec<Intent> {
    vec![
        Intent::new(
            "candidatos",
            ["candidato", "chapa", "concorrente", "quem concorre"],
            CANDIDATOS,
        ),
        Intent::new(
            "regras",
            [
                "regra",
                "funciona",
                "como é",
                "norma",
                "regulamento",
                "funcionamento",
            ],
            REGRAS,
        ),
        Intent::new(
            "quem_pode_votar",
            [
                "quem pode votar",
                "quem vota",
                "quem tem direito",
                "sou aluno posso votar",
                "posso votar",
            ],
            QUEM_PODE_VOTAR,
        ),
        Intent::new(
            "peso_voto",
            ["peso", "vale", "voto do aluno", "voto do professor"],
            PESO_VOTO,
        ),
        Intent::new(
            "data_eleicao",
            ["data", "quando", "que dia", "data da eleição", "qual a data"],
            DATA_ELEICAO,
        ),
        Intent::new(
            "como_votar",
            [
                "como votar",
                "local de votação",
                "onde voto",
                "forma de votar",
                "modo de votar",
            ],
            COMO_VOTAR,
        ),
    ]
}
