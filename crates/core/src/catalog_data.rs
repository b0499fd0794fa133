//! Embedded Canadian Armed Forces rank datasets.
//!
//! Ordered junior to senior within each branch. The quiz treats these as an
//! opaque catalog; nothing here is consulted beyond the five entry fields.

pub(crate) type RawRank = (u32, &'static str, &'static str, &'static str, &'static str);

pub(crate) const NAVY: &[RawRank] = &[
    (
        1,
        "Sailor Third Class",
        "Entry-level rank in the Royal Canadian Navy",
        "Previously known as Ordinary Seaman until 2020 when the RCN modernized its rank structure to be more inclusive.",
        "/ranks/s3.png",
    ),
    (
        2,
        "Sailor Second Class",
        "Trade-qualified sailor with basic operational experience",
        "This rank typically takes 2-3 years to achieve from Sailor Third Class, requiring completion of occupation training.",
        "/ranks/s2.png",
    ),
    (
        3,
        "Sailor First Class",
        "Experienced sailor with leadership responsibilities",
        "Formerly called Leading Seaman, this rank carries significant responsibility including mentoring junior sailors.",
        "/ranks/s1.png",
    ),
    (
        4,
        "Master Sailor",
        "Senior appointment for experienced Sailor First Class",
        "This specialist appointment recognizes leadership and technical expertise while remaining at the S1 rank level.",
        "/ranks/ms.png",
    ),
    (
        5,
        "Petty Officer Second Class",
        "Junior supervisor responsible for departmental tasks",
        "PO2s often serve as section heads and are responsible for training and supervising junior sailors.",
        "/ranks/po2.png",
    ),
    (
        6,
        "Petty Officer First Class",
        "Senior supervisor with significant technical expertise",
        "PO1s are often referred to as 'Chief' despite not being Chief Petty Officers, a tradition dating back many years.",
        "/ranks/po1.png",
    ),
    (
        7,
        "Chief Petty Officer Second Class",
        "Senior technical advisor and departmental manager",
        "CPO2s are usually the most senior technical experts in their trade within their unit.",
        "/ranks/cpo2.png",
    ),
    (
        8,
        "Chief Petty Officer First Class",
        "Most senior non-commissioned member rank",
        "The appointment of Coxswain (senior CPO1 on a ship) is considered the highest non-commissioned position on any vessel.",
        "/ranks/cpo1.png",
    ),
    (
        9,
        "Naval Cadet",
        "Officer under training at military college or university",
        "Naval Cadets undergo intensive training including summer seamanship phases on naval vessels.",
        "/ranks/ncdt.png",
    ),
    (
        10,
        "Acting Sub-Lieutenant",
        "Junior officer completing initial occupation training",
        "This rank is typically held while completing naval warfare officer training or other specialist courses.",
        "/ranks/asl.png",
    ),
    (
        11,
        "Sub-Lieutenant",
        "Junior officer leading small teams or divisions",
        "Sub-Lieutenants often serve as bridge watchkeepers, responsible for safely navigating the ship.",
        "/ranks/sl.png",
    ),
    (
        12,
        "Lieutenant(N)",
        "Experienced junior officer leading larger divisions",
        "The (N) designation distinguishes naval lieutenants from army/air force captains of equivalent rank.",
        "/ranks/lt.png",
    ),
    (
        13,
        "Lieutenant-Commander",
        "Senior officer commanding smaller vessels or shore units",
        "LCdrs often command Maritime Coastal Defence Vessels or serve as Executive Officers on major warships.",
        "/ranks/lcdr.png",
    ),
    (
        14,
        "Commander",
        "Senior officer commanding major warships or shore establishments",
        "Commanders typically have 15-20 years of experience and often command Halifax-class frigates.",
        "/ranks/cdr.png",
    ),
    (
        15,
        "Captain(N)",
        "Senior officer commanding naval formations or bases",
        "The (N) designation prevents confusion with army Captains, as naval Captains are equivalent to Colonels.",
        "/ranks/capt.png",
    ),
    (
        16,
        "Commodore",
        "Junior flag officer leading major formations",
        "Historically, Commodore was a temporary rank given to senior Captains commanding multiple ships.",
        "/ranks/cmdre.png",
    ),
    (
        17,
        "Rear-Admiral",
        "Flag officer commanding maritime forces or major commands",
        "The term 'Rear-Admiral' originates from the age of sail, when this officer commanded the rear squadron of the fleet.",
        "/ranks/radm.png",
    ),
    (
        18,
        "Vice-Admiral",
        "Senior flag officer commanding large maritime forces",
        "Historically commanded the van (front) of the fleet, second in command to the Admiral of the fleet.",
        "/ranks/vadm.png",
    ),
    (
        19,
        "Admiral",
        "Highest naval rank in the Royal Canadian Navy",
        "Only one Admiral position exists in the RCN: the Chief of the Defence Staff, when filled by a naval officer.",
        "/ranks/adm.png",
    ),
];

pub(crate) const ARMY: &[RawRank] = &[
    (
        1,
        "Private (Basic)",
        "Private who has completed basic training",
        "The single chevron represents the first step in an Army career after completing basic military qualification.",
        "/ranks/army/pte-b.png",
    ),
    (
        2,
        "Private (Trained)",
        "Fully trained soldier in their trade",
        "Privates (Trained) have completed their occupational training and are qualified in their military trade.",
        "/ranks/army/pte-t.png",
    ),
    (
        3,
        "Corporal",
        "First leadership rank, supervising small teams",
        "The two chevrons of a Corporal date back to the British Army system of the 18th century.",
        "/ranks/army/cpl.png",
    ),
    (
        4,
        "Master Corporal",
        "Senior appointment for experienced Corporals",
        "The Master Corporal rank was created in 1968 to recognize leadership skills at the junior NCO level.",
        "/ranks/army/mcpl.png",
    ),
    (
        5,
        "Sergeant",
        "Senior NCO leading platoon-sized elements",
        "Sergeants are often referred to as 'The Backbone of the Army' due to their crucial leadership role.",
        "/ranks/army/sgt.png",
    ),
    (
        6,
        "Warrant Officer",
        "Technical expert and senior leader",
        "The crown in the Warrant Officer insignia represents their warrant from the Crown to hold their position.",
        "/ranks/army/wo.png",
    ),
    (
        7,
        "Master Warrant Officer",
        "Senior technical advisor at company/squadron level",
        "MWOs often serve as Company Sergeant Majors, responsible for discipline and administration.",
        "/ranks/army/mwo.png",
    ),
    (
        8,
        "Chief Warrant Officer",
        "Most senior non-commissioned member",
        "The Canadian Army Sergeant Major is the most senior CWO position in the Canadian Army.",
        "/ranks/army/cwo.png",
    ),
    (
        9,
        "Officer Cadet",
        "Officer under training",
        "Officer Cadets train at military colleges or civilian universities under the Regular Officer Training Plan.",
        "/ranks/army/ocdt.png",
    ),
    (
        10,
        "Second Lieutenant",
        "Junior officer completing initial training",
        "The single pip (star) dates back to the British Army system and represents their first commission.",
        "/ranks/army/2lt.png",
    ),
    (
        11,
        "Lieutenant",
        "Platoon commander or specialist officer",
        "Lieutenants typically lead platoons of 30-35 soldiers or serve in specialist roles.",
        "/ranks/army/lt.png",
    ),
    (
        12,
        "Captain",
        "Company second-in-command or company commander",
        "Captains often command companies of 100-150 soldiers or serve in staff positions.",
        "/ranks/army/capt.png",
    ),
    (
        13,
        "Major",
        "Senior officer commanding companies or in staff roles",
        "The crown in a Major's insignia represents their senior officer status.",
        "/ranks/army/maj.png",
    ),
    (
        14,
        "Lieutenant-Colonel",
        "Commanding officer of a battalion",
        "Lieutenant-Colonels typically command units of 400-800 soldiers.",
        "/ranks/army/lcol.png",
    ),
    (
        15,
        "Colonel",
        "Senior officer commanding formations or bases",
        "The maple leaves in a Colonel's insignia represent their senior command status.",
        "/ranks/army/col.png",
    ),
    (
        16,
        "Brigadier-General",
        "General officer commanding brigades",
        "The sword and baton in general officer insignia represent their authority to lead in battle.",
        "/ranks/army/bgen.png",
    ),
    (
        17,
        "Major-General",
        "Senior general officer commanding divisions",
        "Major-Generals often serve as division commanders or in senior staff positions.",
        "/ranks/army/mgen.png",
    ),
    (
        18,
        "Lieutenant-General",
        "Senior general officer commanding army formations",
        "The Commander of the Canadian Army holds the rank of Lieutenant-General.",
        "/ranks/army/lgen.png",
    ),
    (
        19,
        "General",
        "Highest army rank in the Canadian Armed Forces",
        "Only one General position exists: the Chief of the Defence Staff, when filled by an army officer.",
        "/ranks/army/gen.png",
    ),
];

pub(crate) const AIR: &[RawRank] = &[
    (
        1,
        "Aviator (Basic)",
        "Entry-level rank in the Royal Canadian Air Force",
        "Previously known as Private (Recruit) until 2015 when the RCAF reintroduced historical air force rank names.",
        "/ranks/air/avr-b.png",
    ),
    (
        2,
        "Aviator (Trained)",
        "Fully qualified aviator in their trade",
        "Aviators (Trained) have completed their occupational training and wear a propeller badge.",
        "/ranks/air/avr-t.png",
    ),
    (
        3,
        "Corporal",
        "First leadership rank, supervising small teams",
        "Corporals in the RCAF often specialize in aircraft maintenance or other technical trades.",
        "/ranks/air/cpl.png",
    ),
    (
        4,
        "Master Corporal",
        "Senior appointment for experienced Corporals",
        "Master Corporals often serve as crew leaders in aircraft maintenance teams.",
        "/ranks/air/mcpl.png",
    ),
    (
        5,
        "Sergeant",
        "Senior NCO leading specialized teams",
        "Sergeants often supervise maintenance crews or specialized sections within squadrons.",
        "/ranks/air/sgt.png",
    ),
    (
        6,
        "Warrant Officer",
        "Technical expert and senior leader",
        "Warrant Officers often serve as standards evaluators in their trades.",
        "/ranks/air/wo.png",
    ),
    (
        7,
        "Master Warrant Officer",
        "Senior technical advisor at squadron level",
        "MWOs often serve as Squadron Warrant Officers, responsible for discipline and administration.",
        "/ranks/air/mwo.png",
    ),
    (
        8,
        "Chief Warrant Officer",
        "Most senior non-commissioned member",
        "The RCAF Chief Warrant Officer is the most senior CWO position in the Air Force.",
        "/ranks/air/cwo.png",
    ),
    (
        9,
        "Officer Cadet",
        "Officer under training",
        "Officer Cadets train at military colleges or civilian universities in various air force occupations.",
        "/ranks/air/ocdt.png",
    ),
    (
        10,
        "Second Lieutenant",
        "Junior officer completing initial training",
        "Many Second Lieutenants are undergoing pilot training or other air crew qualifications.",
        "/ranks/air/2lt.png",
    ),
    (
        11,
        "Lieutenant",
        "Newly qualified pilot or specialist officer",
        "Lieutenants who are pilots have usually just received their wings and are building experience.",
        "/ranks/air/lt.png",
    ),
    (
        12,
        "Captain",
        "Experienced pilot or specialist officer",
        "Most RCAF pilots achieve the rank of Captain after gaining operational experience.",
        "/ranks/air/capt.png",
    ),
    (
        13,
        "Major",
        "Senior officer commanding flights or in staff roles",
        "Majors often serve as flight commanders or in headquarters staff positions.",
        "/ranks/air/maj.png",
    ),
    (
        14,
        "Lieutenant-Colonel",
        "Commanding officer of a squadron",
        "Lieutenant-Colonels typically command flying or technical squadrons.",
        "/ranks/air/lcol.png",
    ),
    (
        15,
        "Colonel",
        "Senior officer commanding wings or bases",
        "Colonels often command RCAF Wings, which can include multiple squadrons.",
        "/ranks/air/col.png",
    ),
    (
        16,
        "Brigadier-General",
        "General officer commanding major formations",
        "Brigadier-Generals often direct specific capabilities like fighter or transport operations.",
        "/ranks/air/bgen.png",
    ),
    (
        17,
        "Major-General",
        "Senior general officer commanding divisions",
        "Major-Generals may command operational or training divisions of the RCAF.",
        "/ranks/air/mgen.png",
    ),
    (
        18,
        "Lieutenant-General",
        "Senior general officer commanding air force",
        "The Commander of the Royal Canadian Air Force holds the rank of Lieutenant-General.",
        "/ranks/air/lgen.png",
    ),
    (
        19,
        "General",
        "Highest air force rank in the Canadian Armed Forces",
        "Only one General position exists: the Chief of the Defence Staff, when filled by an air force officer.",
        "/ranks/air/gen.png",
    ),
];
