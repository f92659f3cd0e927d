//! Code tables for coded NASR columns
//!
//! Each enumeration lists the codes published in the NASR data dictionary.
//! Where the extracts use more than one spelling for a value, every spelling
//! is listed and the first is canonical.

use crate::code_enum;

// =============================================================================
// Shared Codes
// =============================================================================

code_enum! {
    /// Landing facility type (`SITE_TYPE_CODE`)
    pub enum LandingFacilityType {
        Airport => ["A"],
        Balloonport => ["B"],
        SeaplaneBase => ["C"],
        Gliderport => ["G"],
        Heliport => ["H"],
        Ultralight => ["U"],
    }
}

code_enum! {
    /// FAA administrative region (`REGION_CODE`)
    pub enum FaaRegion {
        Alaska => ["AAL"],
        Central => ["ACE"],
        Eastern => ["AEA"],
        GreatLakes => ["AGL"],
        NewEngland => ["ANE"],
        NorthwestMountain => ["ANM"],
        Southern => ["ASO"],
        Southwest => ["ASW"],
        WesternPacific => ["AWP"],
    }
}

code_enum! {
    /// Source of a surveyed position or distance
    pub enum SourceCode {
        AirForce => ["A"],
        CoastGuard => ["C"],
        CanadianAirac => ["D"],
        Faa => ["F"],
        TechOpsAfs530 => ["FS"],
        NosHistorical => ["G"],
        Ngs => ["K"],
        DodNga => ["M"],
        UsNavy => ["N"],
        Owner => ["O"],
        NosPhotoSurveyHistorical => ["P"],
        QuadPlotHistorical => ["Q"],
        Army => ["R"],
        Siap => ["S"],
        ThirdPartySurvey => ["T"],
        Surveyed => ["Z"],
    }
}

code_enum! {
    /// Estimated or surveyed value
    pub enum DeterminationMethod {
        Estimated => ["E"],
        Surveyed => ["S"],
    }
}

// =============================================================================
// Airport Codes
// =============================================================================

code_enum! {
    pub enum OwnershipType {
        Public => ["PU"],
        Private => ["PR"],
        AirForce => ["MA"],
        Navy => ["MN"],
        Army => ["MR"],
        CoastGuard => ["CG"],
    }
}

code_enum! {
    pub enum FacilityUse {
        OpenToThePublic => ["PU"],
        Private => ["PR"],
    }
}

code_enum! {
    /// Operational status (`ARPT_STATUS`)
    pub enum AirportStatus {
        ClosedIndefinitely => ["CI"],
        ClosedPermanently => ["CP"],
        Operational => ["O"],
    }
}

code_enum! {
    pub enum RepairAvailability {
        Major => ["MAJOR"],
        Minor => ["MINOR"],
        None => ["NONE"],
    }
}

code_enum! {
    pub enum OxygenPressure {
        High => ["HIGH"],
        Low => ["LOW"],
        HighOrLow => ["HIGH/LOW"],
        None => ["NONE"],
    }
}

code_enum! {
    /// Air traffic control tower type (`TWR_TYPE_CODE`)
    pub enum TowerType {
        Tower => ["ATCT"],
        NonTowered => ["NON-ATCT"],
        TowerApproachControl => ["ATCT-A/C"],
        TowerRapcon => ["ATCT-RAPCON"],
        TowerRatcf => ["ATCT-RATCF"],
        TowerTracon => ["ATCT-TRACON"],
    }
}

code_enum! {
    pub enum SegmentedCircle {
        Yes => ["Y"],
        No => ["N"],
        None => ["NONE"],
        YesLighted => ["Y-L"],
    }
}

code_enum! {
    /// Rotating beacon lens color (`BCN_LENS_COLOR`)
    pub enum AirportBeacon {
        ClearGreen => ["CG"],
        ClearYellow => ["CY"],
        ClearGreenYellow => ["CGY"],
        SplitClearGreen => ["SCG"],
        Clear => ["C"],
        Yellow => ["Y"],
        Green => ["G"],
        None => ["N"],
    }
}

code_enum! {
    pub enum WindIndicator {
        None => ["N"],
        Unlighted => ["Y"],
        Lighted => ["Y-L"],
    }
}

code_enum! {
    /// Commercial services offered on the field (`OTHER_SERVICES`)
    pub enum AirportService {
        AirFreight => ["AFRT"],
        CropDusting => ["AGRI"],
        AirAmbulance => ["AMB"],
        Avionics => ["AVNCS"],
        BeachingGear => ["BCHGR"],
        CargoHandling => ["CARGO"],
        Charter => ["CHTR"],
        Glider => ["GLD"],
        PilotInstruction => ["INSTR"],
        ParachuteJumpActivity => ["PAJA"],
        AircraftRental => ["RNTL"],
        AircraftSales => ["SALES"],
        AnnualSurveying => ["SURV"],
        GliderTowing => ["TOW"],
    }
}

code_enum! {
    pub enum ArrestingDevice {
        Bak6 => ["BAK-6"],
        Bak9 => ["BAK-9"],
        Bak12 => ["BAK-12"],
        Bak12B => ["BAK-12B"],
        Bak13 => ["BAK-13"],
        Bak14 => ["BAK-14"],
        E5 => ["E5"],
        E5Dash1 => ["E5-1"],
        E27 => ["E27"],
        E27B => ["E27B"],
        E28 => ["E28"],
        E28B => ["E28B"],
        Emas => ["EMAS"],
        M21 => ["M21"],
        Ma1 => ["MA-1"],
        Ma1A => ["MA-1A"],
        Ma1AMod => ["MA-1A MOD"],
    }
}

code_enum! {
    /// Table a remark refers to (`TAB_NAME`)
    pub enum RemarksTable {
        Airport => ["AIRPORT"],
        AttendanceSchedule => ["AIRPORT_ATTEND_SCHED"],
        Contact => ["AIRPORT_CONTACT"],
        Service => ["AIRPORT_SERVICE"],
        ArrestingDevice => ["ARRESTING_DEVICE"],
        FuelType => ["FUEL_TYPE"],
        Runway => ["RUNWAY"],
        RunwayEnd => ["RUNWAY_END"],
        RunwayEndObstruction => ["RUNWAY_END_OBSTN"],
        RunwaySurfaceType => ["RUNWAY_SURFACE_TYPE"],
    }
}

// =============================================================================
// Runway Codes
// =============================================================================

code_enum! {
    /// Runway surface material
    pub enum SurfaceType {
        Concrete => ["CONC"],
        Asphalt => ["ASPH"],
        Snow => ["SNOW"],
        Ice => ["ICE"],
        Mats => ["MATS"],
        Treated => ["TREATED", "TRTD"],
        Gravel => ["GRVL", "GRAVEL"],
        Turf => ["TURF"],
        Dirt => ["DIRT"],
        PartiallyPaved => ["PEM"],
        RoofTop => ["ROOF-TOP", "ROOFTOP"],
        Water => ["WATER"],
        Aluminum => ["ALUM", "ALUMINUM"],
        Brick => ["BRICK"],
        Caliche => ["CALICHE"],
        Coral => ["CORAL"],
        Deck => ["DECK"],
        Grass => ["GRASS"],
        Metal => ["METAL"],
        Nonstandard => ["NSTD"],
        OilAndChip => ["OIL&CHIP"],
        PiercedSteelPlanking => ["PSP"],
        Sand => ["SAND"],
        Sod => ["SOD"],
        Steel => ["STEEL"],
        Wood => ["WOOD"],
    }
}

code_enum! {
    pub enum SurfaceCondition {
        Excellent => ["EXCELLENT"],
        Good => ["GOOD"],
        Fair => ["FAIR"],
        Poor => ["POOR"],
        Failed => ["FAILED"],
    }
}

code_enum! {
    pub enum SurfaceTreatment {
        Grooved => ["GRVD"],
        PorousFrictionCourse => ["PFC"],
        AggregateFrictionSealCoat => ["AFSC"],
        RubberizedFrictionSealCoat => ["RFSC"],
        WireComb => ["WC"],
        None => ["NONE"],
    }
}

code_enum! {
    pub enum PavementType {
        Rigid => ["R"],
        Flexible => ["F"],
    }
}

code_enum! {
    /// How the runway weight bearing capacity was determined
    pub enum RunwayDeterminationMethod {
        Technical => ["T"],
        UsingAircraft => ["U"],
    }
}

code_enum! {
    pub enum RunwayLightsEdgeIntensity {
        High => ["HIGH"],
        Medium => ["MED"],
        Low => ["LOW"],
        Nonstandard => ["NSTD"],
        None => ["NONE"],
    }
}

code_enum! {
    /// Instrument landing system type listed on a runway end (`ILS_TYPE`)
    pub enum IlsType {
        Ils => ["ILS"],
        Mls => ["MLS"],
        Sdf => ["SDF"],
        Localizer => ["LOCALIZER"],
        Lda => ["LDA"],
        Ismls => ["ISMLS"],
        IlsDme => ["ILS/DME"],
        SdfDme => ["SDF/DME"],
        LocalizerDme => ["LOC/DME"],
        LocalizerGlideslope => ["LOC/GS"],
        LdaDme => ["LDA/DME"],
    }
}

code_enum! {
    pub enum RunwayMarkingType {
        PrecisionInstrument => ["PIR"],
        NonprecisionInstrument => ["NPI"],
        Basic => ["BSC"],
        NumbersOnly => ["NRS"],
        Nonstandard => ["NSTD"],
        Buoys => ["BUOY"],
        ShortTakeoffAndLanding => ["STOL"],
        None => ["NONE"],
    }
}

code_enum! {
    pub enum RunwayMarkingsCondition {
        Good => ["GOOD", "G"],
        Fair => ["FAIR", "F"],
        Poor => ["POOR", "P"],
    }
}

code_enum! {
    /// Visual glideslope indicator (`VGSI_CODE`)
    pub enum VisualGlideslopeIndicator {
        Savasi => ["SAVASI"],
        Vasi => ["VASI"],
        Papi => ["PAPI"],
        TricolorVasi => ["TRI"],
        PulsatingVasi => ["PSI"],
        PanelSystem => ["PNI"],
        S2L => ["S2L"],
        S2R => ["S2R"],
        V2L => ["V2L"],
        V2R => ["V2R"],
        V4L => ["V4L"],
        V4R => ["V4R"],
        V6L => ["V6L"],
        V6R => ["V6R"],
        V12 => ["V12"],
        V16 => ["V16"],
        P2L => ["P2L"],
        P2R => ["P2R"],
        P4L => ["P4L"],
        P4R => ["P4R"],
        Nonstandard => ["NSTD"],
        PrivatelyOwned => ["PVT"],
        Nonspecific => ["VAS"],
        None => ["NONE", "N"],
        Tril => ["TRIL"],
        Trir => ["TRIR"],
        Psil => ["PSIL"],
        Psir => ["PSIR"],
        Pnil => ["PNIL"],
        Pnir => ["PNIR"],
    }
}

code_enum! {
    pub enum ApproachLightSystem {
        Afovrn => ["AFOVRN"],
        Alsaf => ["ALSAF"],
        Alsf1 => ["ALSF1"],
        Alsf2 => ["ALSF2"],
        Mals => ["MALS"],
        Malsf => ["MALSF"],
        Malsr => ["MALSR"],
        Rail => ["RAIL"],
        Sals => ["SALS"],
        Salsf => ["SALSF"],
        Ssals => ["SSALS"],
        Ssalf => ["SSALF"],
        Ssalr => ["SSALR"],
        Odals => ["ODALS"],
        Rlls => ["RLLS"],
        MilitaryOverrun => ["MIL OVRN"],
        Nonstandard => ["NSTD"],
        None => ["NONE"],
    }
}

code_enum! {
    pub enum ObstructionMarking {
        Marked => ["M"],
        Lighted => ["L"],
        MarkedAndLighted => ["ML", "LM"],
        None => ["NONE"],
    }
}

code_enum! {
    /// FAR Part 77 runway category
    pub enum Part77Category {
        UtilityVisual => ["A(V)"],
        OtherThanUtilityVisual => ["B(V)"],
        UtilityNonprecision => ["A(NP)"],
        NonprecisionAboveThreeQuarterMile => ["C"],
        NonprecisionThreeQuarterMile => ["D"],
        PrecisionInstrument => ["PIR"],
    }
}

// =============================================================================
// ILS Codes
// =============================================================================

code_enum! {
    /// ILS facility type (`SYSTEM_TYPE_CODE`)
    pub enum IlsSystemType {
        Ils => ["LS"],
        Sdf => ["SF"],
        Localizer => ["LC"],
        Lda => ["LA"],
        IlsDme => ["LD"],
        SdfDme => ["SD"],
        LocalizerDme => ["LE"],
        LocalizerGlideslope => ["LG"],
        LdaDme => ["DD"],
    }
}

code_enum! {
    pub enum IlsCategory {
        I => ["I"],
        II => ["II"],
        III => ["III"],
        IIIB => ["IIIB"],
    }
}

code_enum! {
    pub enum GlideslopeType {
        Glideslope => ["GS"],
        GlideslopeWithDme => ["GD"],
    }
}

code_enum! {
    pub enum MarkerType {
        Inner => ["IM"],
        Middle => ["MM"],
        Outer => ["OM"],
    }
}
