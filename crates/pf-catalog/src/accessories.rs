//! Fitting accessory catalog with minor-loss K-factors.

/// A pipe fitting or accessory with its dimensionless loss coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accessory {
    pub id: &'static str,
    pub display_name: &'static str,
    pub k_factor: f64,
}

impl Accessory {
    pub fn matches(&self, query: &str) -> bool {
        self.id.eq_ignore_ascii_case(query) || self.display_name.eq_ignore_ascii_case(query)
    }
}

const ACCESSORIES: [Accessory; 18] = [
    Accessory {
        id: "valvula-gaveta-aberta",
        display_name: "Válvula de gaveta (aberta)",
        k_factor: 0.2,
    },
    Accessory {
        id: "valvula-globo-aberta",
        display_name: "Válvula de globo (aberta)",
        k_factor: 10.0,
    },
    Accessory {
        id: "valvula-retencao-aberta",
        display_name: "Válvula de retenção (aberta)",
        k_factor: 2.5,
    },
    Accessory {
        id: "valvula-borboleta-aberta",
        display_name: "Válvula borboleta (aberta)",
        k_factor: 0.3,
    },
    Accessory {
        id: "valvula-angulo-aberta",
        display_name: "Válvula de ângulo (aberta)",
        k_factor: 5.0,
    },
    Accessory {
        id: "cotovelo-padrao-90",
        display_name: "Cotovelo de 90°",
        k_factor: 0.9,
    },
    Accessory {
        id: "cotovelo-padrao-45",
        display_name: "Cotovelo de 45°",
        k_factor: 0.4,
    },
    Accessory {
        id: "curva-padrao-90",
        display_name: "Curva de 90°",
        k_factor: 0.4,
    },
    Accessory {
        id: "curva-padrao-45",
        display_name: "Curva de 45°",
        k_factor: 0.2,
    },
    Accessory {
        id: "curva-padrao-22",
        display_name: "Curva de 22.5°",
        k_factor: 0.1,
    },
    Accessory {
        id: "te-passagem-direta",
        display_name: "Tê, passagem direta",
        k_factor: 0.6,
    },
    Accessory {
        id: "te-saida-lado",
        display_name: "Tê, saída de lado",
        k_factor: 1.3,
    },
    Accessory {
        id: "te-saida-bilateral",
        display_name: "Tê, saída bilateral",
        k_factor: 1.8,
    },
    Accessory {
        id: "juncao",
        display_name: "Junção",
        k_factor: 0.4,
    },
    Accessory {
        id: "crivo",
        display_name: "Crivo",
        k_factor: 0.75,
    },
    Accessory {
        id: "bocais",
        display_name: "Bocais",
        k_factor: 2.75,
    },
    Accessory {
        id: "ampliacao-gradual",
        display_name: "Ampliação gradual",
        k_factor: 0.3,
    },
    Accessory {
        id: "reducao-gradual",
        display_name: "Redução gradual",
        k_factor: 0.15,
    },
];

pub fn accessories() -> &'static [Accessory] {
    &ACCESSORIES
}

pub fn find_accessory(id: &str) -> Option<&'static Accessory> {
    ACCESSORIES.iter().find(|a| a.matches(id))
}
