//! Static reference data about AI datacenters and their local impact.
//!
//! Read-only; the only operations are listing and lookup by id.

use crate::error::InputError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CityId(pub String);

#[derive(Clone, Debug, PartialEq)]
pub struct DatacenterCity {
    pub id: String,
    pub name: String,
    pub region: String,
    pub companies: Vec<String>,
    pub water_usage: String,
    pub energy_usage: String,
    pub population: String,
    pub impact: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobalStats {
    pub total_water_usage: String,
    pub total_energy: String,
    pub projected_energy_2027: String,
    pub carbon_emissions: String,
    pub percent_global_energy: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialImpact {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

struct CityRecord {
    id: &'static str,
    name: &'static str,
    region: &'static str,
    companies: &'static [&'static str],
    water_usage: &'static str,
    energy_usage: &'static str,
    population: &'static str,
    impact: &'static str,
}

struct ImpactRecord {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    examples: &'static [&'static str],
}

const CITIES: &[CityRecord] = &[
    CityRecord {
        id: "the-dalles",
        name: "The Dalles",
        region: "Oregon, USA",
        companies: &["Google"],
        water_usage: "25% of the city's water",
        energy_usage: "1.8 TWh/year",
        population: "15,000 residents",
        impact: "The community faces water shortages while the datacenter draws millions of liters every day. Residents report restrictions on water use.",
    },
    CityRecord {
        id: "mesa",
        name: "Mesa",
        region: "Arizona, USA",
        companies: &["Google", "Meta"],
        water_usage: "4.7 billion liters/year",
        energy_usage: "2.5 TWh/year",
        population: "500,000 residents",
        impact: "In a desert region with chronic drought, datacenters compete with farms and residents for scarce water.",
    },
    CityRecord {
        id: "dublin",
        name: "Dublin",
        region: "Ireland",
        companies: &["Microsoft", "Amazon", "Google", "Meta"],
        water_usage: "12% of national water consumption",
        energy_usage: "21% of the country's electricity",
        population: "1.4 million residents",
        impact: "Datacenters use more electricity than every Irish home combined, threatening the stability of the national grid.",
    },
    CityRecord {
        id: "gothenburg",
        name: "Gothenburg",
        region: "Sweden",
        companies: &["Amazon", "Microsoft"],
        water_usage: "15% of municipal consumption",
        energy_usage: "500 GWh/year",
        population: "580,000 residents",
        impact: "Waste heat from datacenters warms thousands of homes, but energy use keeps growing exponentially.",
    },
    CityRecord {
        id: "quilicura",
        name: "Quilicura",
        region: "Chile",
        companies: &["Google", "Microsoft"],
        water_usage: "169 million liters/year (projected)",
        energy_usage: "Expanding",
        population: "210,000 residents",
        impact: "In a region under severe water stress, local communities protest the construction of new datacenters.",
    },
    CityRecord {
        id: "singapore",
        name: "Singapore",
        region: "Singapore",
        companies: &["Google", "Meta", "Microsoft", "Amazon"],
        water_usage: "7% of national consumption",
        energy_usage: "7% of national electricity",
        population: "5.6 million residents",
        impact: "The government imposed a temporary moratorium on new datacenters over their environmental impact. The country already imports water.",
    },
];

const GLOBAL_STATS: GlobalStatsRecord = GlobalStatsRecord {
    total_water_usage: "626 billion liters/year",
    total_energy: "200 TWh/year (2024)",
    projected_energy_2027: "400 TWh/year",
    carbon_emissions: "100 million tonnes CO2/year",
    percent_global_energy: "2-4%",
};

struct GlobalStatsRecord {
    total_water_usage: &'static str,
    total_energy: &'static str,
    projected_energy_2027: &'static str,
    carbon_emissions: &'static str,
    percent_global_energy: &'static str,
}

const SOCIAL_IMPACTS: &[ImpactRecord] = &[
    ImpactRecord {
        icon: "💧",
        title: "Water Scarcity",
        description: "Local communities face rationing while datacenters consume millions of liters a day for cooling.",
        examples: &["The Dalles lost 25% of its water", "Community protests in Chile"],
    },
    ImpactRecord {
        icon: "⚡",
        title: "Grid Instability",
        description: "Overloaded power grids cause blackouts and raise energy costs for residents.",
        examples: &["Ireland: 21% of national electricity", "Virginia: grid at its limit"],
    },
    ImpactRecord {
        icon: "🌡️",
        title: "Heat Islands",
        description: "Heat released by datacenters raises local temperatures, affecting quality of life and energy use.",
        examples: &["2-5°C increase in nearby areas", "Heavier air-conditioning use"],
    },
    ImpactRecord {
        icon: "🏠",
        title: "Gentrification",
        description: "The arrival of tech companies drives up housing costs and pushes out low-income residents.",
        examples: &["40% rise in rents", "Displacement of traditional communities"],
    },
    ImpactRecord {
        icon: "🌾",
        title: "Agriculture",
        description: "Farmers lose access to the water they need for irrigation, hurting food production.",
        examples: &["Abandoned farms in Arizona", "Disputes over water rights"],
    },
    ImpactRecord {
        icon: "🏭",
        title: "Pollution",
        description: "Diesel backup generators and cooling systems release pollutants that degrade air quality.",
        examples: &["Higher PM2.5 levels", "Refrigerant emissions"],
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl From<&CityRecord> for DatacenterCity {
    fn from(record: &CityRecord) -> Self {
        DatacenterCity {
            id: record.id.to_string(),
            name: record.name.to_string(),
            region: record.region.to_string(),
            companies: owned(record.companies),
            water_usage: record.water_usage.to_string(),
            energy_usage: record.energy_usage.to_string(),
            population: record.population.to_string(),
            impact: record.impact.to_string(),
        }
    }
}

impl From<&ImpactRecord> for SocialImpact {
    fn from(record: &ImpactRecord) -> Self {
        SocialImpact {
            icon: record.icon.to_string(),
            title: record.title.to_string(),
            description: record.description.to_string(),
            examples: owned(record.examples),
        }
    }
}

pub fn affected_cities() -> Vec<DatacenterCity> {
    CITIES.iter().map(DatacenterCity::from).collect()
}

pub fn find_city(id: &str) -> Result<DatacenterCity, InputError> {
    CITIES
        .iter()
        .find(|record| record.id == id)
        .map(DatacenterCity::from)
        .ok_or_else(|| InputError::UnknownCity(id.to_string()))
}

pub fn global_stats() -> GlobalStats {
    GlobalStats {
        total_water_usage: GLOBAL_STATS.total_water_usage.to_string(),
        total_energy: GLOBAL_STATS.total_energy.to_string(),
        projected_energy_2027: GLOBAL_STATS.projected_energy_2027.to_string(),
        carbon_emissions: GLOBAL_STATS.carbon_emissions.to_string(),
        percent_global_energy: GLOBAL_STATS.percent_global_energy.to_string(),
    }
}

pub fn social_impacts() -> Vec<SocialImpact> {
    SOCIAL_IMPACTS.iter().map(SocialImpact::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affected_cities() {
        let cities = affected_cities();
        assert_eq!(cities.len(), 6);
        assert_eq!(cities[0].name, "The Dalles");
        assert_eq!(cities[2].companies, vec!["Microsoft", "Amazon", "Google", "Meta"]);
    }

    #[test]
    fn test_city_ids_unique() {
        let cities = affected_cities();
        for (i, a) in cities.iter().enumerate() {
            for b in &cities[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_city() {
        let city = find_city("mesa").unwrap();
        assert_eq!(city.region, "Arizona, USA");
        assert_eq!(city.water_usage, "4.7 billion liters/year");
    }

    #[test]
    fn test_find_city_unknown() {
        assert_eq!(
            find_city("atlantis"),
            Err(InputError::UnknownCity("atlantis".to_string()))
        );
    }

    #[test]
    fn test_global_stats() {
        let stats = global_stats();
        assert_eq!(stats.total_energy, "200 TWh/year (2024)");
        assert_eq!(stats.percent_global_energy, "2-4%");
    }

    #[test]
    fn test_social_impacts() {
        let impacts = social_impacts();
        assert_eq!(impacts.len(), 6);
        assert!(impacts.iter().all(|i| i.examples.len() == 2));
        assert_eq!(impacts[1].title, "Grid Instability");
    }
}
